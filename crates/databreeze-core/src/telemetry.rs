//! Tracing subscriber setup.
//!
//! The library only emits through the `tracing` facade. Binaries and tests
//! that want to see those events call [`init_tracing`] with an explicit
//! filter; nothing here reads the environment.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Fallback directive when `filter` does not parse.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a global fmt subscriber filtered by `filter` (e.g.
/// `"databreeze=trace"`). Only the first call has any effect; later calls
/// and an already-installed foreign subscriber are ignored.
pub fn init_tracing(filter: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    });
}
