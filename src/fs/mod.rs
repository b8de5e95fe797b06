//! Filesystem utilities for cachecfg.
//!
//! The compiler itself never touches the filesystem for output; the CLI uses
//! this module to put the generated artifact in place.

pub mod atomic;

pub use atomic::atomic_write_file;
