//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize tracing for the tag cloud engine.
///
/// Reads the `TAGCLOUD_LOG` environment variable for per-module log levels,
/// e.g. `TAGCLOUD_LOG=tagcloud_engine::cluster=debug,tagcloud_engine=info`.
///
/// Falls back to `tagcloud=info` if `TAGCLOUD_LOG` is not set or is invalid.
/// Calling it more than once is a no-op. A subscriber already installed by
/// the host is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("tagcloud=info"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
