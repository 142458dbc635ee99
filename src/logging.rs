//! Diagnostic logging setup
//!
//! Status lines for the operator go through [`crate::ui`]; this module only
//! wires `tracing` events (per-file archive entries, discovery decisions)
//! to stderr.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "updatekit=debug" } else { "warn" }
}

/// Install the global subscriber; `RUST_LOG` takes precedence over `--verbose`
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "updatekit=debug");
        assert_eq!(default_directive(false), "warn");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
