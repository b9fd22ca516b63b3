use tracing_subscriber::EnvFilter;

/// Install the global JSON tracing subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise `quiet` selects `warn`, and
/// verbose runs log at `info`. Calling this twice is harmless; the second
/// install is ignored.
pub fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let result = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if result.is_ok() {
        tracing::debug!(event = "core.logging.initialized", level = default_level);
    }
}
