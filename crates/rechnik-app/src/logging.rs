use rechnik_config::log::LogConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "rechnik=info";

/// Installs the global subscriber. Logs go to stderr; stdout is for output.
pub fn init(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = config
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text = (!config.json).then(|| {
        fmt::layer()
            .with_target(false)
            .with_ansi(atty::is(atty::Stream::Stderr))
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .init();
}
