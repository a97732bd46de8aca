use std::io;

use tracing_subscriber::EnvFilter;

/// Filter directives, same syntax as `RUST_LOG`.
pub const LOG_VAR: &str = "INSTALL_CHECK_LOG";

/// Sends diagnostics to stderr. Nothing is printed unless [`LOG_VAR`] asks for it.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("off"));

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
