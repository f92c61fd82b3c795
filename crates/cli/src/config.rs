//! CLI configuration management
//!
//! Handles loading and saving configuration from ~/.variant-eval/config.toml

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use variant_eval_sdk::{ClientConfig, DEFAULT_API_URL};

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// API endpoint URL
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,

    /// App used when `--app-id` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_app_id: Option<String>,

    /// Default output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_colored")]
    pub colored: bool,

    /// Default timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,
}

fn default_api_endpoint() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_colored() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_endpoint: default_api_endpoint(),
            default_app_id: None,
            output_format: OutputFormat::default(),
            colored: default_colored(),
            timeout_seconds: default_timeout(),
            debug: false,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".variant-eval"))
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;

        if let Ok(api_url) = std::env::var("VARIANT_EVAL_API_URL") {
            config.api_endpoint = api_url;
        }
        if let Ok(app_id) = std::env::var("VARIANT_EVAL_APP_ID") {
            config.default_app_id = Some(app_id);
        }
        if let Ok(format) = std::env::var("VARIANT_EVAL_OUTPUT_FORMAT") {
            config.output_format = OutputFormat::from_str(&format).unwrap_or_default();
        }
        if let Ok(timeout) = std::env::var("VARIANT_EVAL_TIMEOUT") {
            config.timeout_seconds = timeout
                .parse()
                .context("VARIANT_EVAL_TIMEOUT must be a number of seconds")?;
        }
        if std::env::var("VARIANT_EVAL_DEBUG").is_ok() {
            config.debug = true;
        }
        if std::env::var("NO_COLOR").is_ok() {
            config.colored = false;
        }

        Ok(config)
    }

    /// Load configuration from file only, without environment overrides
    pub fn load_file() -> Result<Self> {
        let config_file = Self::config_file()?;

        if !config_file.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_file).context("Failed to read config file")?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        let config_file = Self::config_file()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// SDK client settings derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.api_endpoint.clone())
            .with_timeout(Duration::from_secs(self.timeout_seconds))
            .with_debug(self.debug)
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api_endpoint" | "api-endpoint" | "api_url" => Some(self.api_endpoint.clone()),
            "default_app_id" | "default-app-id" | "app_id" => self.default_app_id.clone(),
            "output_format" | "output-format" | "format" => Some(self.output_format.to_string()),
            "colored" | "color" => Some(self.colored.to_string()),
            "timeout" | "timeout_seconds" => Some(self.timeout_seconds.to_string()),
            "debug" => Some(self.debug.to_string()),
            _ => None,
        }
    }

    /// Change a configuration value in memory
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_endpoint" | "api-endpoint" | "api_url" => {
                self.api_endpoint = value.to_string();
            }
            "default_app_id" | "default-app-id" | "app_id" => {
                self.default_app_id = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "output_format" | "output-format" | "format" => {
                self.output_format = OutputFormat::from_str(value).with_context(|| {
                    format!("Invalid output format: {}. Use json, table, or plain", value)
                })?;
            }
            "colored" | "color" => {
                self.colored = value.parse().context("Invalid boolean value")?;
            }
            "timeout" | "timeout_seconds" => {
                self.timeout_seconds = value.parse().context("Invalid timeout value")?;
            }
            "debug" => {
                self.debug = value.parse().context("Invalid boolean value")?;
            }
            _ => anyhow::bail!("Unknown configuration key: {}", key),
        }
        Ok(())
    }

    /// Set a configuration value and persist it
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }

    /// Reset configuration to defaults
    pub fn reset(&mut self) -> Result<()> {
        *self = Self::default();
        self.save()
    }
}
