use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber for diagnostics.
///
/// `RUST_LOG` takes precedence over the level implied by the flags.
pub fn init(verbose: bool, quiet: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pipes={level}")));

    // Ignored if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
