//! Command implementations for cachecfg.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod compile;
mod show;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Compile(args) => compile::cmd_compile(args),
        Command::Show(args) => show::cmd_show(args),
    }
}
