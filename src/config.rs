//! Bot configuration
//!
//! Credentials and connection settings. Built in code with the `with_*`
//! builders or loaded from the environment (and an optional `.env` file).

use crate::error::{Error, Result};

/// Default base URL of the HTTP RPC API
pub const DEFAULT_API_BASE: &str = "https://slack.com/api/";

/// Configuration for a [`Bot`](crate::Bot)
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// API token (required)
    pub token: String,
    /// Display name used as the default `username` when posting
    pub name: Option<String>,
    /// Base URL the RPC method name is appended to
    pub api_base: String,
}

impl BotConfig {
    /// Create a configuration with the given token and default settings
    pub fn new(token: impl Into<String>) -> Self {
        BotConfig {
            token: token.into(),
            name: None,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override the API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Load configuration from `SLACK_TOKEN`, `SLACK_BOT_NAME` and `SLACK_API_BASE`
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from a variable lookup
    ///
    /// An empty `SLACK_BOT_NAME` counts as unset.
    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = BotConfig::new(get("SLACK_TOKEN").unwrap_or_default());

        if let Some(name) = get("SLACK_BOT_NAME").filter(|name| !name.is_empty()) {
            config.name = Some(name);
        }
        if let Some(api_base) = get("SLACK_API_BASE") {
            config.api_base = api_base;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can be used to build a bot
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(Error::invalid_argument("token must be defined"));
        }
        url::Url::parse(&self.api_base)
            .map_err(|e| Error::invalid_argument(format!("Invalid API base URL: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BotConfig::new("xoxb-1");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert!(config.name.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BotConfig::new("xoxb-1")
            .with_name("bot")
            .with_api_base("http://127.0.0.1:9000/api/");

        assert_eq!(config.name.as_deref(), Some("bot"));
        assert_eq!(config.api_base, "http://127.0.0.1:9000/api/");
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = BotConfig::new("").validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);

        let err = BotConfig::new("   ").validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_invalid_api_base_rejected() {
        let err = BotConfig::new("xoxb-1")
            .with_api_base("not a url")
            .validate()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_lookup_missing_token() {
        let err = BotConfig::from_lookup(lookup(&[("SLACK_BOT_NAME", "bot")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_lookup_empty_name_is_unset() {
        let config = BotConfig::from_lookup(lookup(&[
            ("SLACK_TOKEN", "xoxb-1"),
            ("SLACK_BOT_NAME", ""),
        ]))
        .unwrap();

        assert_eq!(config.token, "xoxb-1");
        assert!(config.name.is_none());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_lookup_applies_overrides() {
        let config = BotConfig::from_lookup(lookup(&[
            ("SLACK_TOKEN", "xoxb-1"),
            ("SLACK_BOT_NAME", "helper"),
            ("SLACK_API_BASE", "http://127.0.0.1:9000/api/"),
        ]))
        .unwrap();

        assert_eq!(config.name.as_deref(), Some("helper"));
        assert_eq!(config.api_base, "http://127.0.0.1:9000/api/");
    }

    #[test]
    fn test_lookup_invalid_api_base() {
        let err = BotConfig::from_lookup(lookup(&[
            ("SLACK_TOKEN", "xoxb-1"),
            ("SLACK_API_BASE", "not a url"),
        ]))
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }
}
