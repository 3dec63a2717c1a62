//! Logging setup using the `tracing` stack.
//!
//! Verbosity from the CLI maps onto a level filter; the `FFS_LOG`
//! environment variable takes precedence when set, using the usual
//! `EnvFilter` directive syntax.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber.
///
/// `verbose` is the count of `-v` flags: warnings only by default, then
/// info, debug, trace. Logs go to stderr so they never mix with exported
/// JSON or problem reports on stdout.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("FFS_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
