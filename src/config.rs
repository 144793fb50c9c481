use crate::constants::{API_KEY_ENV, DEFAULT_MODEL, GEMINI_API_BASE_URL, PLACEHOLDER_API_KEY};
use crate::errors::{ChatError, ChatResult};
use dotenv::dotenv;
use reqwest::Url;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Reads the API key once from the environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::default().with_api_key(env::var(API_KEY_ENV).ok())
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// A key is usable when it is set, non-empty and not the placeholder from the sample `.env`.
    pub fn has_valid_key(&self) -> bool {
        self.usable_key().is_some()
    }

    pub(crate) fn usable_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }

    pub fn validate(&self) -> ChatResult<()> {
        if self.model.trim().is_empty() {
            return Err(ChatError::config_error("Model name is required"));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| ChatError::config_error(format!("Invalid base URL '{}': {}", self.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ChatError::config_error(format!(
                "Base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(())
    }
}
