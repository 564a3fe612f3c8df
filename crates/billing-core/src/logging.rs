//! Logging initialization for the application.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// The level comes from `RUST_LOG` when set, otherwise from the configured
/// default. Safe to call more than once; later calls are no-ops.
///
/// # Example
///
/// ```ignore
/// init_logging("info");
/// tracing::info!("application started");
/// ```
pub fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(level)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();
}

/// Map a configured level string onto a filter directive, defaulting to
/// `info` for anything unrecognized.
fn directive(level: &str) -> &'static str {
    match level.to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" => "error",
        _ => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_mapping() {
        assert_eq!(directive("TRACE"), "trace");
        assert_eq!(directive("warning"), "warn");
        assert_eq!(directive("error"), "error");
        assert_eq!(directive("verbose"), "info");
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging("debug");
        init_logging("info");
    }
}
