use std::str::FromStr;

use log::LevelFilter;

use forma_domain as domain;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Deployment settings, fixed at build time.
///
/// `FORMA_BACKEND_URL` is the base URL of the exercise backend. If unset, the backend is expected
/// on the same origin. `FORMA_BODY_PARTS` is a comma-separated list of selectable body parts.
/// `FORMA_LOG_LEVEL` sets the maximum log level (default: `info`).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub backend_url: String,
    pub body_parts: domain::BodyParts,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("FORMA_BACKEND_URL"),
            option_env!("FORMA_BODY_PARTS"),
            option_env!("FORMA_LOG_LEVEL"),
        )
    }

    pub fn from_values(
        backend_url: Option<&str>,
        body_parts: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let backend_url = backend_url.unwrap_or_default().trim();
        if !(backend_url.is_empty()
            || backend_url.starts_with("http://")
            || backend_url.starts_with("https://")
            || backend_url.starts_with('/'))
        {
            return Err(ConfigError::BackendUrl(backend_url.to_string()));
        }

        let body_parts = match body_parts {
            Some(body_parts) if !body_parts.trim().is_empty() => {
                domain::BodyParts::new(&body_parts.split(',').collect::<Vec<_>>())?
            }
            _ => domain::BodyParts::default(),
        };

        let log_level = match log_level {
            Some(log_level) => LevelFilter::from_str(log_level.trim())
                .map_err(|_| ConfigError::LogLevel(log_level.to_string()))?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            backend_url: backend_url.to_string(),
            body_parts,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            body_parts: domain::BodyParts::default(),
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid backend URL: {0}")]
    BackendUrl(String),
    #[error("invalid body parts: {0}")]
    BodyParts(#[from] domain::BodyPartError),
    #[error("invalid log level: {0}")]
    LogLevel(String),
}
