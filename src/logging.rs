//! Logging setup shared by the filter binaries
//!
//! Created: 2026-10-17

use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` if set and valid, else `info`
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// `info` level; `debug` shows each skipped line with its line number.
pub fn init_logging() {
    fmt().with_env_filter(env_filter()).with_target(false).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fmt_subscriber_scopes_a_scan() {
        let subscriber = fmt()
            .with_env_filter(env_filter())
            .with_target(false)
            .with_test_writer()
            .finish();
        let stats = tracing::subscriber::with_default(subscriber, || {
            crate::jsonl::scan_reader("{}\nnot json\n".as_bytes(), |_, _, _| {
                Ok(crate::jsonl::Verdict::Keep)
            })
        })
        .unwrap();
        assert_eq!(stats.malformed_lines, 1);
    }
}
