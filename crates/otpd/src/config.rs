//! Configuration management for otpd.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Telnyx API key
    #[serde(default)]
    pub api_key: String,

    /// Number of hex characters in a generated token
    #[serde(default = "default_token_length")]
    pub token_length: usize,

    /// Country code prepended to normalized phone numbers
    #[serde(default = "default_country_code")]
    pub country_code: String,

    /// Sender number for outbound SMS
    #[serde(default)]
    pub from_number: String,
}

// Default value functions
fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}
fn default_token_length() -> usize {
    6
}
fn default_country_code() -> String {
    "+1".to_string()
}

impl AppConfig {
    /// Load configuration from file, with CLI overrides
    pub fn load(config_path: &str, args: &super::Args) -> Result<Self> {
        let mut config = if Path::new(config_path).exists() {
            let settings = config::Config::builder()
                .add_source(config::File::with_name(config_path))
                .build()
                .context("Failed to load config file")?;

            settings
                .try_deserialize()
                .context("Failed to parse config")?
        } else {
            tracing::warn!("Config file not found, using defaults");
            Self::default()
        };

        // Apply CLI overrides
        if let Some(ref api_key) = args.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(ref listen) = args.listen {
            config.listen_addr = listen.clone();
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            api_key: String::new(),
            token_length: default_token_length(),
            country_code: default_country_code(),
            from_number: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.token_length, 6);
        assert_eq!(config.country_code, "+1");
        assert!(config.api_key.is_empty());
    }
}
