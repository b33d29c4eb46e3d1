use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for the crate's own spans. `verbose` raises anything quieter
/// than `debug` to `debug`; `trace` is kept.
pub fn filter_directive(level: &str, verbose: bool) -> String {
    let level = level.trim().to_ascii_lowercase();
    let level = match level.as_str() {
        "trace" => "trace",
        _ if verbose => "debug",
        "" => "info",
        other => other,
    };
    format!("kata_calc={}", level)
}

/// `RUST_LOG` wins over the configured level.
fn default_filter(level: &str, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level, verbose)))
}

/// Log lines go to stderr so stdout only carries results.
pub fn init_cli_logger(level: &str, verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Structured output for CI logs; selected by `[logging] json = true`.
pub fn init_json_logger(level: &str, verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_reaches_filter() {
        assert_eq!(filter_directive("warn", false), "kata_calc=warn");
        assert_eq!(filter_directive("ERROR", false), "kata_calc=error");
        assert_eq!(filter_directive("trace", false), "kata_calc=trace");
        assert_eq!(filter_directive("", false), "kata_calc=info");
    }

    #[test]
    fn test_verbose_forces_debug_but_keeps_trace() {
        assert_eq!(filter_directive("warn", true), "kata_calc=debug");
        assert_eq!(filter_directive("info", true), "kata_calc=debug");
        assert_eq!(filter_directive("trace", true), "kata_calc=trace");
    }

    #[test]
    fn test_directive_parses_as_env_filter() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(EnvFilter::try_new(filter_directive(level, false)).is_ok());
        }
    }
}
