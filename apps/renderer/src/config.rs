use anyhow::{Context, Result};

use crate::errors::AppError;

const DEFAULT_TEMPLATE: &str = "1";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables.
/// Nothing is required up front: the API key is only checked when the
/// enhancement pass actually runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: Option<String>,
    pub default_template: String,
    pub llm_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            openrouter_api_key: lookup("OPENROUTER_API_KEY").filter(|k| !k.trim().is_empty()),
            default_template: lookup("DEFAULT_TEMPLATE")
                .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
            llm_timeout_secs: match lookup("LLM_TIMEOUT_SECS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
                None => DEFAULT_LLM_TIMEOUT_SECS,
            },
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// The API key for the enhancement service, or a configuration error.
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.openrouter_api_key.as_deref().ok_or_else(|| {
            AppError::Config(
                "Required environment variable 'OPENROUTER_API_KEY' is not set".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.default_template, "1");
        assert_eq!(config.llm_timeout_secs, 120);
        assert_eq!(config.rust_log, "info");
        assert!(config.openrouter_api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("OPENROUTER_API_KEY", "sk-test"),
            ("DEFAULT_TEMPLATE", "4"),
            ("LLM_TIMEOUT_SECS", "30"),
        ])
        .unwrap();
        assert_eq!(config.require_api_key().unwrap(), "sk-test");
        assert_eq!(config.default_template, "4");
        assert_eq!(config.llm_timeout_secs, 30);
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let config = config_from(&[("OPENROUTER_API_KEY", "  ")]).unwrap();
        let err = config.require_api_key().unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_bad_timeout_rejected() {
        assert!(config_from(&[("LLM_TIMEOUT_SECS", "soon")]).is_err());
    }
}
