//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Verdict tracing/logging system.
///
/// Reads the `VERDICT_LOG` environment variable for per-subsystem log
/// levels, e.g. `VERDICT_LOG=verdict_engine=debug,verdict_core=info`.
/// Falls back to `verdict=info` if `VERDICT_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("VERDICT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("verdict=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
