//! Logging setup
//!
//! The library only emits `tracing` events; binaries and tests decide where
//! they go. [`init`] installs a formatted subscriber filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` wins over `default_filter` (e.g. `"botify_core=debug"`).
/// Calling it again after a subscriber is installed is a no-op returning
/// `false`.
pub fn init(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
