//! Client configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LIST_POLL_MS: u64 = 5_000;
pub const DEFAULT_DETAIL_POLL_MS: u64 = 3_000;
pub const DEFAULT_TOAST_MS: u64 = 5_000;
pub const DEFAULT_RECIPE_PATH: &str = "recipes/beverage.json";

/// Errors raised while building a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API URL '{0}': expected an absolute http or https URL")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Refresh periods for the polling views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    pub list_ms: u64,
    pub detail_ms: u64,
}

impl PollIntervals {
    pub fn list(&self) -> Duration {
        Duration::from_millis(self.list_ms)
    }

    pub fn detail(&self) -> Duration {
        Duration::from_millis(self.detail_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeouts: Timeouts,
    pub poll: PollIntervals,
    pub toast_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            timeouts: Timeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
            poll: PollIntervals { list_ms: DEFAULT_LIST_POLL_MS, detail_ms: DEFAULT_DETAIL_POLL_MS },
            toast_ms: DEFAULT_TOAST_MS,
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `ADGEN_API_URL`: backend base URL, default `http://127.0.0.1:8000`
    /// - `ADGEN_REQUEST_TIMEOUT_SECS`: default 30
    /// - `ADGEN_CONNECT_TIMEOUT_SECS`: default 10
    /// - `ADGEN_LIST_POLL_MS`: default 5000
    /// - `ADGEN_DETAIL_POLL_MS`: default 3000
    /// - `ADGEN_TOAST_MS`: default 5000
    ///
    /// Numbers that fail to parse, or are zero, fall back to their default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = normalize_api_url(
            &std::env::var("ADGEN_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned()),
        )?;
        let timeouts = Timeouts {
            request_secs: env_parse_u64("ADGEN_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("ADGEN_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let poll = PollIntervals {
            list_ms: env_parse_u64("ADGEN_LIST_POLL_MS", DEFAULT_LIST_POLL_MS),
            detail_ms: env_parse_u64("ADGEN_DETAIL_POLL_MS", DEFAULT_DETAIL_POLL_MS),
        };
        let toast_ms = env_parse_u64("ADGEN_TOAST_MS", DEFAULT_TOAST_MS);

        Ok(Self { api_url, timeouts, poll, toast_ms })
    }

    /// Replace the base URL, applying the same validation as `from_env`.
    pub fn with_api_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.api_url = normalize_api_url(raw)?;
        Ok(self)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    match reqwest::Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::InvalidApiUrl(raw.to_owned())),
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
