//! Error types for cachecfg.
//!
//! Uses thiserror for derive macros. Every variant carries a message that names
//! the offending file, action or key.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for cache configuration compilation.
#[derive(Error, Debug)]
pub enum CacheCfgError {
    /// A configuration file does not exist or is not readable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A configuration file is improperly formatted.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A cache key check failed while resolving a policy.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// The generated artifact could not be serialized or written.
    #[error("Output error: {0}")]
    Output(String),
}

impl CacheCfgError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CacheCfgError::Configuration(_) => exit_codes::CONFIGURATION_FAILURE,
            CacheCfgError::Parse(_) => exit_codes::PARSE_FAILURE,
            CacheCfgError::Initialization(_) => exit_codes::INITIALIZATION_FAILURE,
            CacheCfgError::Output(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for cachecfg operations.
pub type Result<T> = std::result::Result<T, CacheCfgError>;
