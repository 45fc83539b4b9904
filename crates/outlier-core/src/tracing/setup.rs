//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "OUTLIER_LOG";

/// Filter applied when `OUTLIER_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "outlier=info";

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads `OUTLIER_LOG` for per-crate log levels.
/// Format: `OUTLIER_LOG=outlier_analysis=debug,outlier_cli=info`
///
/// Falls back to `outlier=info` if `OUTLIER_LOG` is not set or is invalid.
/// Output goes to stderr so stdout stays clean for rendered results.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
