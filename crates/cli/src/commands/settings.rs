//! `config` subcommands

use anyhow::Result;

use crate::config::Config;
use crate::output::{colors, TableFormatter};

/// Show the effective configuration
pub fn show(config: &Config) -> Result<()> {
    let path = Config::config_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "(unknown)".to_string());

    println!("{}", TableFormatter::key_value(entries(config))?);
    println!("{}", colors::dim(&format!("Config file: {}", path)));
    Ok(())
}

/// Print a single configuration value
pub fn get(config: &Config, key: &str) -> Result<()> {
    match config.get(key) {
        Some(value) => println!("{}", value),
        None => println!("{}", colors::dim("(not set)")),
    }
    Ok(())
}

/// Persist a configuration value
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    config.set(key, value)?;
    println!("{}", colors::success(&format!("{} = {}", key, value)));
    Ok(())
}

/// Restore and persist the default configuration
pub fn reset(config: &mut Config) -> Result<()> {
    config.reset()?;
    println!("{}", colors::success("Configuration reset to defaults."));
    Ok(())
}

fn entries(config: &Config) -> Vec<(&'static str, String)> {
    vec![
        ("api_endpoint", config.api_endpoint.clone()),
        (
            "default_app_id",
            config
                .default_app_id
                .clone()
                .unwrap_or_else(|| "(not set)".to_string()),
        ),
        ("output_format", config.output_format.to_string()),
        ("colored", config.colored.to_string()),
        ("timeout_seconds", config.timeout_seconds.to_string()),
        ("debug", config.debug.to_string()),
    ]
}
