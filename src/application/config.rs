// src/application/config.rs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration of the client core.
///
/// Deserializable so an embedding shell can ship it as JSON; environment
/// variables override whatever was loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL, including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Where the session token is persisted. `None` means the platform
    /// default data directory.
    #[serde(default)]
    pub session_file: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout_secs(),
            session_file: None,
        }
    }
}

impl ClientConfig {
    /// Defaults, then `JOBHUB_BASE_URL` / `JOBHUB_TIMEOUT_SECS` /
    /// `JOBHUB_SESSION_FILE` from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("JOBHUB_BASE_URL") {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }
        if let Ok(raw) = std::env::var("JOBHUB_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout_secs = secs,
                _ => log::warn!("ignoring invalid JOBHUB_TIMEOUT_SECS {:?}", raw),
            }
        }
        if let Ok(path) = std::env::var("JOBHUB_SESSION_FILE") {
            if !path.is_empty() {
                config.session_file = Some(PathBuf::from(path));
            }
        }
        config
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.session_file.is_none());
    }

    #[test]
    fn test_empty_json_fills_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "https://jobs.example.com/api"}"#).unwrap();
        assert_eq!(config.base_url, "https://jobs.example.com/api");
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
