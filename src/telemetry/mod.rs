//! Tracing setup for the puzzle server.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, EnvFilter, prelude::*};

/// Directives used when `RUST_LOG` is unset: puzzle lookups, hints and solves
/// at debug, HTTP request spans at info.
pub const DEFAULT_FILTER: &str = "info,cryptogram=debug,tower_http=info,axum=info";

fn filter_from(value: Option<&str>) -> EnvFilter {
    value
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Filters come from `RUST_LOG`; an unset or unparsable value falls back to
/// [`DEFAULT_FILTER`]. Fails if a subscriber is already installed.
pub fn try_init() -> Result<(), TryInitError> {
    let filter = filter_from(std::env::var("RUST_LOG").ok().as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).compact())
        .try_init()
}
