use std::str::FromStr;
use tracing::Level;

/// Resolve the log level from settings, falling back to INFO on unknown names.
/// `verbose` always wins with DEBUG.
pub fn resolve_level(log_level: &str, verbose: bool) -> Level {
    if verbose {
        return Level::DEBUG;
    }
    Level::from_str(log_level.trim()).unwrap_or(Level::INFO)
}

/// Install the stderr fmt subscriber. Stdout is reserved for command output.
pub fn init_logging(log_level: &str, verbose: bool) {
    let level = resolve_level(log_level, verbose);

    // A subscriber may already be installed (tests, embedding); keep it
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
