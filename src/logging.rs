//! Tracing subscriber setup for binaries and demos built on the SDK.
//!
//! The library itself only emits events; installing a subscriber is left to
//! the application.

use crate::config::LoggingConfig;
use crate::error::{ModrinthError, Result};
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ModrinthError::validation(format!("Invalid log level: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        "pretty" => builder.pretty().try_init(),
        other => {
            return Err(ModrinthError::validation(format!(
                "Invalid log format: {}",
                other
            )))
        }
    };

    installed.map_err(|e| ModrinthError::validation(format!("Logging already initialized: {}", e)))
}
