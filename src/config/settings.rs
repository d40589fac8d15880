//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use super::constants::{
    DEFAULT_PUBLISH_TIMEOUT_MS, DEFAULT_REDIS_HOST, DEFAULT_REDIS_PORT, DEFAULT_REDIS_TOPIC,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// How handled failures are mapped to HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorStatusMode {
    /// Every handled failure, not-found included, is reported as 500.
    #[default]
    Legacy,
    /// Each error kind keeps its own status (404 for a missing book).
    Precise,
}

impl FromStr for ErrorStatusMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(ErrorStatusMode::Legacy),
            "precise" => Ok(ErrorStatusMode::Precise),
            other => Err(format!("unknown error status mode: {}", other)),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub redis_host: String,
    pub redis_port: u16,
    /// Channel book creation events are published to
    pub redis_topic: String,
    pub publish_timeout_ms: u64,
    pub error_status: ErrorStatusMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            redis_host: DEFAULT_REDIS_HOST.to_string(),
            redis_port: DEFAULT_REDIS_PORT,
            redis_topic: DEFAULT_REDIS_TOPIC.to_string(),
            publish_timeout_ms: DEFAULT_PUBLISH_TIMEOUT_MS,
            error_status: ErrorStatusMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let error_status = match lookup("BOOKS_ERROR_STATUS") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to legacy", e);
                ErrorStatusMode::Legacy
            }),
            None => defaults.error_status,
        };

        Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            redis_host: lookup("REDIS_HOST").unwrap_or(defaults.redis_host),
            redis_port: lookup("REDIS_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.redis_port),
            redis_topic: lookup("REDIS_TOPIC").unwrap_or(defaults.redis_topic),
            publish_timeout_ms: lookup("REDIS_PUBLISH_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.publish_timeout_ms),
            error_status,
        }
    }

    /// Redis connection URL built from host and port.
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/", self.redis_host, self.redis_port)
    }

    pub fn publish_timeout(&self) -> Duration {
        Duration::from_millis(self.publish_timeout_ms)
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.redis_url(), "redis://127.0.0.1:6379/");
        assert_eq!(config.redis_topic, "books");
        assert_eq!(config.error_status, ErrorStatusMode::Legacy);
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("REDIS_HOST", "redis.internal"),
            ("REDIS_PORT", "6380"),
            ("REDIS_TOPIC", "book-events"),
            ("REDIS_PUBLISH_TIMEOUT_MS", "250"),
            ("BOOKS_ERROR_STATUS", "Precise"),
        ]));

        assert_eq!(config.redis_url(), "redis://redis.internal:6380/");
        assert_eq!(config.redis_topic, "book-events");
        assert_eq!(config.publish_timeout(), Duration::from_millis(250));
        assert_eq!(config.error_status, ErrorStatusMode::Precise);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_PORT", "not-a-port"),
            ("BOOKS_ERROR_STATUS", "strict"),
        ]));

        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert_eq!(config.error_status, ErrorStatusMode::Legacy);
    }
}
