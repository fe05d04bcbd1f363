//! Log subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "PAWDESK_LOG";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Logs go to stderr so the transcript on
/// stdout stays clean.
pub fn init(json: bool) {
    let registry = tracing_subscriber::registry().with(filter());
    let result = if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    };
    if let Err(err) = result {
        // Already installed (tests, embedding); keep the existing one.
        tracing::debug!(%err, "log subscriber already installed");
    }
}
