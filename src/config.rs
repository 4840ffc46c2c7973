//! Configuration management for the Modrinth SDK

use crate::error::{ModrinthError, Result};
use crate::server::{ApiEnvironment, ModrinthServer};
use crate::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prefix of environment variables that override configuration values
pub const ENV_PREFIX: &str = "MODRINTH_SDK";

/// Main SDK configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SdkConfig {
    /// API connection configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Deployment to target (production or staging)
    #[serde(default)]
    pub environment: ApiEnvironment,

    /// Base URL overriding the one of the selected environment
    pub base_url: Option<String>,

    /// API key attached to the server descriptor; never sent with requests
    pub api_key: Option<String>,

    /// User agent for requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directives (`info`, `modrinth_sdk=debug,warn`)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (pretty, compact, json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: ApiEnvironment::default(),
            base_url: None,
            api_key: None,
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ApiConfig {
    /// Server descriptor described by this configuration
    pub fn server(&self) -> ModrinthServer {
        let server = match &self.base_url {
            Some(url) => ModrinthServer::custom(self.environment.name(), url.trim_end_matches('/')),
            None => ModrinthServer::new(self.environment),
        };

        match &self.api_key {
            Some(key) => server.with_api_key(key),
            None => server,
        }
    }

    /// Default deadline of API requests
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Connection timeout
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl SdkConfig {
    /// Load configuration from environment and defaults
    pub fn load() -> Result<Self> {
        Self::load_from_file(None::<std::path::PathBuf>)
    }

    /// Load configuration from a specific file, then environment variables
    pub fn load_from_file<P: AsRef<Path>>(config_file: Option<P>) -> Result<Self> {
        let mut builder = Config::builder();

        builder = builder.add_source(Config::try_from(&SdkConfig::default())?);

        if let Some(path) = config_file {
            let path = path.as_ref();
            if path.exists() {
                info!("Loading configuration from: {}", path.display());
                builder = builder.add_source(File::from(path));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_seconds == 0 {
            return Err(ModrinthError::validation("API timeout cannot be 0"));
        }

        if self.api.connect_timeout_seconds == 0 {
            return Err(ModrinthError::validation("Connect timeout cannot be 0"));
        }

        if self.api.user_agent.trim().is_empty() {
            return Err(ModrinthError::validation("User agent cannot be empty"));
        }

        if let Some(url) = &self.api.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ModrinthError::validation(format!(
                    "Base URL must start with http:// or https://: {}",
                    url
                )));
            }
        }

        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ModrinthError::validation(format!(
                "Invalid log level '{}': {}",
                self.logging.level, e
            )));
        }

        if !["json", "pretty", "compact"].contains(&self.logging.format.as_str()) {
            return Err(ModrinthError::validation(format!(
                "Invalid log format: {}",
                self.logging.format
            )));
        }

        Ok(())
    }

    /// Create a sample configuration file
    pub fn create_sample_config() -> String {
        toml::to_string_pretty(&SdkConfig::default())
            .unwrap_or_else(|_| "# Failed to generate sample config".to_string())
    }

    /// Server descriptor described by this configuration
    pub fn server(&self) -> ModrinthServer {
        self.api.server()
    }
}
