//! Diagnostic logging for the cachecfg CLI.
//!
//! Log lines go to stderr so stdout stays reserved for the generated artifact.
//! `RUST_LOG` overrides the level chosen from `--verbose`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map the `-v` count to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "cachecfg=warn",
        1 => "cachecfg=info",
        2 => "cachecfg=debug",
        _ => "cachecfg=trace",
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directive(0), "cachecfg=warn");
        assert_eq!(default_directive(1), "cachecfg=info");
        assert_eq!(default_directive(2), "cachecfg=debug");
        assert_eq!(default_directive(9), "cachecfg=trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}
