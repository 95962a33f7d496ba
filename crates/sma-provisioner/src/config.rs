//! Handler configuration loaded from environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Handler configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Provisioning API configuration
    pub chime: ChimeConfig,

    /// Stack-output store configuration
    pub stacks: StacksConfig,

    /// Handler configuration
    #[serde(default)]
    pub handler: HandlerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChimeConfig {
    /// Provisioning API key
    pub api_key: String,

    /// API base URL
    #[serde(default = "default_chime_url")]
    pub base_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StacksConfig {
    /// Stack store API key
    pub api_key: String,

    /// Stack store base URL
    #[serde(default = "default_stacks_url")]
    pub base_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HandlerConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_chime_url() -> String {
    "https://service.chime.aws.amazon.com".into()
}

fn default_stacks_url() -> String {
    "https://cloudformation.us-east-1.amazonaws.com".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // try_parsing(true) would coerce numeric-looking keys
                    // and +-prefixed values. Keep strings as strings.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
