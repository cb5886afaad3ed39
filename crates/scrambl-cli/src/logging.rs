//! Log output to stderr.

use tracing_subscriber::EnvFilter;

use crate::constants::env;

/// Install the global subscriber.
///
/// `-v` forces debug; otherwise SCRAMBL_LOG is used, falling back to warnings
/// only (errors only with `-q`).
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(env::LOG)
            .unwrap_or_else(|_| EnvFilter::new(if quiet { "error" } else { "warn" }))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
