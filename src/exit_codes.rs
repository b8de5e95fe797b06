//! Exit code constants for the cachecfg CLI.
//!
//! - 0: Success
//! - 1: Configuration error (missing or unreadable file)
//! - 2: Parse error (malformed YAML document)
//! - 3: Initialization error (a cache key failed its type check)
//! - 4: Output error (artifact could not be serialized or written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// A configuration file is missing or unreadable.
pub const CONFIGURATION_FAILURE: i32 = 1;

/// A configuration file is not a valid cache document.
pub const PARSE_FAILURE: i32 = 2;

/// A recognized cache key has a value of the wrong type.
pub const INITIALIZATION_FAILURE: i32 = 3;

/// The generated artifact could not be serialized or written.
pub const OUTPUT_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            CONFIGURATION_FAILURE,
            PARSE_FAILURE,
            INITIALIZATION_FAILURE,
            OUTPUT_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
