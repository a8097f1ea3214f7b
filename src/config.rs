use crate::service::DEFAULT_MAX_REVIEWS_TO_SERVE;
use serde::Deserialize;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 9556;
const DEFAULT_CONFIG_FILE: &str = "config.toml";
const CONFIG_PATH_VAR: &str = "REVIEW_SERVICE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
    #[error("reviews.max_reviews_to_serve must be at least 1")]
    InvalidSampleCount,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub reviews: ReviewsConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReviewsConfig {
    /// Number of random reviews served when no category matches
    pub max_reviews_to_serve: usize,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            max_reviews_to_serve: DEFAULT_MAX_REVIEWS_TO_SERVE,
        }
    }
}

/// Stats and tracing exporters are not implemented; these only change what gets logged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub disable_stats: bool,
    pub disable_tracing: bool,
}

impl AppConfig {
    /// Defaults, then the config file if any, then the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_env(lookup)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("PORT") {
            self.server.port = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }
        // Presence alone disables, whatever the value.
        if lookup("DISABLE_STATS").is_some() {
            self.telemetry.disable_stats = true;
        }
        if lookup("DISABLE_TRACING").is_some() {
            self.telemetry.disable_tracing = true;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.reviews.max_reviews_to_serve == 0 {
            return Err(ConfigError::InvalidSampleCount);
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
