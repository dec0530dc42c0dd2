use tracing_subscriber::EnvFilter;
use wpass::config::LoggingSettings;

/// Install the stderr subscriber.
///
/// Filter precedence: `RUST_LOG`, then `--verbose`, then `logging.level`.
pub fn init(settings: &LoggingSettings, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = if verbose { "debug" } else { settings.level.as_str() };
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
