//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding per-target log directives.
pub const LOG_ENV: &str = "DIABRISK_LOG";

static INIT: Once = Once::new();

/// Install the stderr subscriber.
///
/// `DIABRISK_LOG` takes the usual `EnvFilter` syntax, e.g.
/// `DIABRISK_LOG=diabrisk=debug`. Without it the level is `warn`, raised to
/// `debug` by `--verbose`. Safe to call more than once.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "diabrisk=debug" } else { "diabrisk=warn" };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbose),
            )
            .with(filter)
            .init();
    });
}
