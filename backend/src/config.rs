//! Configuration management for the AgriDash platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Assistant (chat-completion) API configuration
    pub assistant: AssistantConfig,

    /// Estimation workflow configuration
    pub estimation: EstimationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    /// OpenAI-compatible chat-completion base URL
    pub base_url: String,

    /// Model used when the stored chat config does not name one
    pub default_model: String,

    /// Maximum completion tokens per request
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EstimationConfig {
    /// Simulated computation delay before a result is produced, in
    /// milliseconds. Tests set this to zero.
    pub simulated_delay_ms: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("assistant.base_url", "https://api.groq.com/openai/v1")?
            .set_default("assistant.default_model", "llama-3.1-8b-instant")?
            .set_default("assistant.max_tokens", 1000)?
            .set_default("assistant.temperature", 0.7)?
            .set_default("estimation.simulated_delay_ms", 1500)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
