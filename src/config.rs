//! Client and generation configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default endpoint for the Gemini `generateContent` API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variables checked for the API key, in order
const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY"];

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    4096
}

fn default_timeout() -> Duration {
    Duration::from_millis(60_000)
}

/// Generation parameters forwarded to the remote model on every attempt.
///
/// `temperature` and `max_output_tokens` are passed through to the API
/// verbatim with no local range validation; values the remote side rejects
/// surface as ordinary attempt failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Upper bound on generated length
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Per-attempt network timeout
    #[serde(with = "humantime_serde", default = "default_timeout")]
    pub timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            timeout: default_timeout(),
        }
    }
}

impl GenerationConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum number of output tokens
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Set the per-attempt network timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Connection settings for the Gemini endpoint
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key appended to the request URL as a query credential
    pub api_key: String,
    /// Base URL of the generation endpoint
    pub base_url: String,
}

impl ClientConfig {
    /// Create a config with an explicit API key and the default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the endpoint base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolve the API key from the environment.
    ///
    /// Checks `GEMINI_API_KEY` then `GOOGLE_API_KEY`. This is the only place
    /// the crate touches ambient environment state; the call path itself
    /// never reads it.
    pub fn from_env() -> Result<Self> {
        for var in API_KEY_ENV_VARS {
            if let Ok(key) = std::env::var(var) {
                if !key.is_empty() {
                    return Ok(Self::new(key));
                }
            }
        }
        Err(Error::config(format!(
            "no API key found; set one of: {}",
            API_KEY_ENV_VARS.join(", ")
        )))
    }

    /// Get a display-safe (masked) version of the API key
    pub fn masked_key(&self) -> String {
        mask_api_key(&self.api_key)
    }
}

fn mask_api_key(key: &str) -> String {
    if key.len() <= 8 {
        return "*".repeat(key.len());
    }
    format!("{}...{}", &key[..4], &key[key.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_output_tokens, 4096);
        assert_eq!(config.timeout, Duration::from_millis(60_000));
    }

    #[test]
    fn test_generation_config_builders() {
        let config = GenerationConfig::new()
            .with_temperature(1.2)
            .with_max_output_tokens(256)
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.temperature, 1.2);
        assert_eq!(config.max_output_tokens, 256);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_partial_config_deserializes_to_defaults() {
        let config: GenerationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GenerationConfig::default());

        let config: GenerationConfig =
            serde_json::from_str(r#"{"temperature": 0.2}"#).unwrap();
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_output_tokens, 4096);
        assert_eq!(config.timeout, Duration::from_millis(60_000));
    }

    #[test]
    fn test_client_config_base_url() {
        let config = ClientConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        let config = ClientConfig::new("test-key").with_base_url("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_masked_key() {
        let config = ClientConfig::new("AIzaSyA-1234567890abcdef");
        let masked = config.masked_key();
        assert!(masked.starts_with("AIza"));
        assert!(masked.ends_with("cdef"));
        assert!(!masked.contains("1234567890"));

        let short = ClientConfig::new("key");
        assert_eq!(short.masked_key(), "***");
    }
}
