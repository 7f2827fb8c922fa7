//! Shared setup for the opvec client binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use tracing_subscriber::{fmt, EnvFilter};

/// Log level for a `-v` count: none is `warn`, then `info`, `debug`, `trace`.
#[must_use]
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the `-v` level;
/// `quiet` installs nothing.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
