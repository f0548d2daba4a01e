// src/config.rs
//
// Backend connection settings.
//
// Defaults match the local development backend; each value can be
// overridden from the environment by the embedding application.

use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_PAGE_SIZE: usize = 100;

pub const ENV_BASE_URL: &str = "MOVIE_API_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "MOVIE_API_TIMEOUT_MS";
pub const ENV_PAGE_SIZE: &str = "MOVIE_API_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,

    #[serde(rename = "timeout_ms", deserialize_with = "deserialize_millis")]
    pub timeout: Duration,

    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `MOVIE_API_*` environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let millis = raw.trim().parse::<u64>().map_err(|e| {
                AppError::Config(format!("{} must be a number of milliseconds: {}", ENV_TIMEOUT_MS, e))
            })?;
            config.timeout = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            config.page_size = raw.trim().parse::<usize>().map_err(|e| {
                AppError::Config(format!("{} must be a positive integer: {}", ENV_PAGE_SIZE, e))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| AppError::Config(format!("Invalid base URL '{}': {}", self.base_url, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(AppError::Config(format!(
                "Base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.page_size == 0 {
            return Err(AppError::Config("Page size must be greater than zero".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(AppError::Config("Request timeout must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// Base URL without trailing slashes, ready for path concatenation
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn deserialize_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.timeout, Duration::from_millis(10_000));
        assert_eq!(config.page_size, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = CatalogConfig::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "https://api.example.com/"),
            (ENV_TIMEOUT_MS, "2500"),
            (ENV_PAGE_SIZE, "25"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://api.example.com/");
        assert_eq!(config.normalized_base_url(), "https://api.example.com");
        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_malformed_env_values() {
        assert!(matches!(
            CatalogConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_MS, "soon")])),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            CatalogConfig::from_lookup(lookup_from(&[(ENV_PAGE_SIZE, "0")])),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            CatalogConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "ftp://files")])),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: CatalogConfig =
            serde_json::from_str(r#"{"base_url": "http://movies.local", "timeout_ms": 500}"#).unwrap();
        assert_eq!(config.base_url, "http://movies.local");
        assert_eq!(config.timeout, Duration::from_millis(500));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }
}
