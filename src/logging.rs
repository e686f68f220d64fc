//! Logging initialization.
//!
//! Diagnostics use the `tracing` ecosystem and go to stderr; stdout carries
//! the run report printed by [`output`](crate::output).

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber.
///
/// `verbose` selects DEBUG instead of WARN. `RUST_LOG`, when set, wins.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
