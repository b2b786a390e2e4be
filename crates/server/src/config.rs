use std::env;
use std::time::Duration;

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 5000;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the prediction service; endpoint paths are appended to it.
    pub upstream_base_url: String,
    /// Upper bound on a single upstream call, body read included.
    pub upstream_timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Missing or unparseable values take defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            upstream_base_url: get("UPSTREAM_BASE_URL")
                .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string()),
            upstream_timeout: Duration::from_millis(
                get("UPSTREAM_TIMEOUT_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_MS),
            ),
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: get("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Configuration pointing at a specific upstream, with default timeout.
    pub fn with_upstream(upstream_base_url: impl Into<String>) -> Self {
        Self {
            upstream_base_url: upstream_base_url.into(),
            upstream_timeout: Duration::from_millis(DEFAULT_UPSTREAM_TIMEOUT_MS),
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }
}
