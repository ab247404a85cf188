//! Runtime configuration read from the environment.
//!
//! Only the service credential is required. The completion endpoint can be
//! pointed elsewhere (a proxy, a local mock) through `GROQ_API_URL`.

use std::env;
use std::fmt;
use thiserror::Error;
use url::Url;

use crate::summarizer::DEFAULT_ENDPOINT;

pub const ENV_API_KEY: &str = "GROQ_API_KEY";
pub const ENV_API_URL: &str = "GROQ_API_URL";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    api_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(ENV_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_API_KEY))?;

        let api_url = match env::var(ENV_API_URL) {
            Ok(url) if !url.trim().is_empty() => {
                let url = url.trim().to_string();
                Url::parse(&url).map_err(|e| ConfigError::InvalidValue {
                    field: ENV_API_URL,
                    reason: e.to_string(),
                })?;
                url
            }
            _ => DEFAULT_ENDPOINT.to_string(),
        };

        Ok(Self { api_key, api_url })
    }

    /// Bearer token for the summarization service.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Chat-completion endpoint.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

// keeps the key out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
