//! Logging for Lexis
//!
//! Installs a `tracing-subscriber` fmt layer on standard error. Standard output
//! is reserved for the translation result, so nothing here may write to it.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when the requested directive cannot be parsed
pub const FALLBACK_FILTER: &str = "off";

/// Build the filter for a directive string, falling back to [`FALLBACK_FILTER`]
#[must_use]
pub fn filter(log_filter: &str) -> EnvFilter {
    EnvFilter::try_new(log_filter).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Initialize logging
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed
pub fn init(log_filter: &str) -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter(log_filter))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
