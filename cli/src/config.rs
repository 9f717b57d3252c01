//! Configuration management for the Plant Care Advisor CLI
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with PCA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::Language;

use crate::cli::OutputFormat;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Language advice is printed in
    pub language: Language,

    /// Output configuration
    pub output: OutputConfig,

    /// Rule catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON catalog replacing the built-in rules
    #[serde(default)]
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("PCA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("language", "zh")?
            .set_default("output.format", "text")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (PCA_ prefix)
            .add_source(
                Environment::with_prefix("PCA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            language: Language::default(),
            output: OutputConfig {
                format: OutputFormat::Text,
            },
            catalog: CatalogConfig::default(),
        }
    }
}
