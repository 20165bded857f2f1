use tracing_subscriber::EnvFilter;

/// Targets that receive log output: the binary and the calendar library.
const CRATE_TARGETS: &[&str] = &["fdate", "fdate_calendar"];

/// Initialize tracing based on CLI verbosity level.
///
/// `RUST_LOG` overrides the `-v` count if set. Logs go to stderr; stdout is
/// reserved for command output such as `--json`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Maps a `-v` count to a level: 0 warn, 1 info, 2 debug, 3+ trace.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the `EnvFilter` directives used when `RUST_LOG` is unset.
fn default_directives(verbosity: u8) -> String {
    let level = level(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        assert_eq!(default_directives(0), "fdate=warn,fdate_calendar=warn");
    }

    #[test]
    fn each_v_raises_the_level() {
        assert_eq!(level(1), "info");
        assert_eq!(level(2), "debug");
        assert_eq!(level(3), "trace");
        assert_eq!(level(u8::MAX), "trace");
    }

    #[test]
    fn directives_parse_as_filter() {
        for verbosity in 0..=3 {
            let directives = default_directives(verbosity);
            assert!(
                EnvFilter::try_new(&directives).is_ok(),
                "rejected {directives:?}"
            );
        }
    }
}
