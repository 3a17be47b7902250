//! Logging initialization.
//!
//! Diagnostics go through `tracing` to stderr. `--verbose` lowers the default
//! level from `info` to `debug`, which adds one line per written variant.
//! `RUST_LOG` overrides both.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
