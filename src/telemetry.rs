//! Tracing subscriber installation.

use crate::config::{ConfigError, LogFormat, LoggingConfig};

/// Install the global tracing subscriber described by `config`.
///
/// Logs go to stderr so stdout stays free for decoder output.
///
/// # Errors
///
/// Returns `ConfigError` if the filter is invalid or a global subscriber is
/// already installed.
pub fn init(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = config.env_filter()?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| ConfigError::Telemetry(e.to_string()))
}
