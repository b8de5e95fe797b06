//! Cache configuration flattener.
//!
//! Reads an ordered list of `cache.yml` documents, merges them so that later
//! files override earlier ones, and splits the reserved `all` section from the
//! named actions. Unknown keys are ignored with a warning for forward
//! compatibility; recognized keys are type-checked.

mod merge;
mod model;
mod operations;
pub mod types;


// Re-export public API
pub use merge::{merge_documents, merge_mapping};
pub use model::{ConfigDocument, FlatConfig};
pub use operations::{get_configuration, parse_yaml, parse_yamls};
pub use types::{ALL_SECTION, DEFAULT_ACTION, PartialPolicy, Vary};
