//! Logging setup for the `censory` binary.
//!
//! Standard output carries prompts and censored phrases, so logs go to standard error. `RUST_LOG`
//! takes precedence over the configured level when set.

use crate::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Quiet enough to stay out of an interactive session.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the filter, preferring `RUST_LOG` over `level`.
pub fn filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Installs the global subscriber. Fails if `level` is not a valid filter or a subscriber is
/// already installed.
pub fn init_logging(level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level)?)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
