//! Log subscriber setup driven by the `LOG_LEVEL` environment variable

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::io::configuration::{DEFAULT_LOG_LEVEL, LOG_LEVEL_ENV, QUIET_LOG_LEVEL};
use crate::io::error::{GridError, Result};

/// Build the filter: `LOG_LEVEL` wins, otherwise the quiet or default level
pub fn log_filter(quiet: bool) -> EnvFilter {
    let fallback = if quiet {
        QUIET_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };

    EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install a compact stderr subscriber for the process
///
/// # Errors
///
/// Returns `Logging` if a global subscriber is already installed
pub fn init_logging(quiet: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(log_filter(quiet))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| GridError::Logging {
            reason: e.to_string(),
        })
}
