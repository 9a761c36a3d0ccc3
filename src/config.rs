use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Error, Result};
use derive_getters::Getters;
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://cloud.iexapis.com/stable";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILE: &str = "stock-quote-tui.log";

pub const ENV_BASE_URL: &str = "QUOTE_API_BASE_URL";
pub const ENV_TOKEN: &str = "QUOTE_API_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "QUOTE_API_TIMEOUT_SECS";
pub const ENV_LOG_FILE: &str = "QUOTE_LOG_FILE";

#[derive(Clone, Debug, Getters)]
pub struct Config {
    base_url: String,
    api_token: Option<String>,
    request_timeout: Duration,
    log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(base_url) = get(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        config.api_token = get(ENV_TOKEN);
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            let parsed = secs
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Failed to parse {} '{}'", ENV_TIMEOUT_SECS, secs))?;
            if parsed == 0 {
                return Err(Error::msg(format!("{} must be at least 1", ENV_TIMEOUT_SECS)));
            }
            config.request_timeout = Duration::from_secs(parsed);
        }
        if let Some(log_file) = get(ENV_LOG_FILE) {
            config.log_file = PathBuf::from(log_file);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }

    pub fn with_api_token(mut self, api_token: Option<String>) -> Self {
        if api_token.is_some() {
            self.api_token = api_token;
        }
        self
    }

    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        if let Some(secs) = secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        self
    }

    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }

    pub fn http_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.request_timeout)
            .build()
            .with_context(|| "Failed to build HTTP client")
    }
}
