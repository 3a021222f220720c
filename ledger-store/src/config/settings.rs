//! Configuration settings for ledger-store

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::defaults;
use crate::error::{Result, StoreError};

/// Where the ledger tables live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Schema prefix spliced into every statement (`schema.table`)
    #[serde(default = "default_schema")]
    pub schema: String,

    /// Connection URL handed to whatever pool backs the repositories
    #[serde(default)]
    pub url: Option<String>,
}

/// Main configuration struct for the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub database: DatabaseSettings,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_schema() -> String {
    defaults::SCHEMA.to_string()
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            url: None,
        }
    }
}

impl StoreConfig {
    /// Create a default config using the given schema
    pub fn with_schema(schema: impl Into<String>) -> Self {
        Self {
            database: DatabaseSettings {
                schema: schema.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content).map_err(|e| {
            StoreError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration using config-rs (file + environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        } else {
            builder = builder.add_source(File::with_name(defaults::CONFIG_FILE).required(false));
        }

        // LEDGER_LOG_LEVEL, LEDGER_DATABASE__SCHEMA, LEDGER_DATABASE__URL
        builder = builder.add_source(
            Environment::with_prefix(defaults::ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let config: StoreConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let schema = &self.database.schema;
        if schema.is_empty() {
            return Err(StoreError::ConfigError(
                "database.schema is required".into(),
            ));
        }

        // The schema is spliced into SQL text unescaped
        let mut chars = schema.chars();
        let starts_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !starts_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(StoreError::ConfigError(format!(
                "database.schema must be a plain identifier, got {:?}",
                schema
            )));
        }

        Ok(())
    }

    /// The configured schema name
    pub fn schema(&self) -> &str {
        &self.database.schema
    }
}
