//! Console logging setup for both binaries

use crate::io::configuration::{DEFAULT_LOG_LEVEL, VERBOSE_LOG_LEVEL};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Pick the default filter directive for the requested verbosity
pub const fn default_level(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    }
}

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` takes precedence over `verbose`. Returns `false` when a
/// subscriber was already installed, which leaves the existing one in place.
pub fn init_logging(verbose: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok()
}
