//! Logging setup for the command line tool
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;

/// Default filter when `RUST_LOG` is unset
pub fn default_directive(settings: &Settings, verbose: bool) -> &'static str {
    if verbose || settings.debug {
        "tidyimports=debug"
    } else {
        "warn"
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over the settings.
///
/// Calling this twice is harmless: the second registration is ignored.
pub fn init(settings: &Settings, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(settings, verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
