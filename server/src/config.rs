//! Process configuration.
//!
//! # Design
//! Everything is read once from the environment at startup, before the
//! listener is bound. A missing `YT_API_KEY` is fatal; the other values fall
//! back to defaults and log that they did.

use std::{env, fmt, time::Duration};

use thiserror::Error;
use thumbnails_core::DEFAULT_BASE_URL;
use tracing::{info, warn};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable YT_API_KEY has not been set!")]
    MissingApiKey,

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub upstream_base_url: String,
    pub upstream_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &"<redacted>")
            .field("upstream_base_url", &self.upstream_base_url)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("YT_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let host = lookup("HOST").unwrap_or_else(|| {
            info!("HOST not set, using default: {DEFAULT_HOST}");
            DEFAULT_HOST.to_string()
        });

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|e| {
                warn!("Invalid PORT value: {e}");
                ConfigError::Invalid {
                    key: "PORT",
                    reason: format!("{raw:?}: {e}"),
                }
            })?,
            None => {
                info!("PORT not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        let upstream_base_url = lookup("YT_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        key: "UPSTREAM_TIMEOUT_SECS",
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: "UPSTREAM_TIMEOUT_SECS",
                        reason: format!("{raw:?}: {e}"),
                    })
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            host,
            port,
            api_key,
            upstream_base_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
