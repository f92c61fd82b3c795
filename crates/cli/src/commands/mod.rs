//! CLI commands

pub mod annotations;
pub mod configs;
pub mod evaluations;
pub mod evaluators;
pub mod settings;

use crate::config::Config;
use crate::output::{colors, render, render_list, JsonFormatter, OutputFormat};
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use variant_eval_sdk::Client;

/// Context passed to all commands
pub struct CommandContext {
    pub config: Config,
    pub client: Client,
    app_id: Option<String>,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// `app_id` takes precedence over the configured default app.
    pub fn new(config: Config, app_id: Option<String>) -> Result<Self> {
        let client = Client::new(config.client_config())?;
        Ok(Self::with_client(config, client, app_id))
    }

    /// Create a context around an existing client
    pub fn with_client(config: Config, client: Client, app_id: Option<String>) -> Self {
        let app_id = app_id.or_else(|| config.default_app_id.clone());
        Self {
            config,
            client,
            app_id,
        }
    }

    /// App the command operates on, or an error if none was given
    pub fn require_app_id(&self) -> Result<&str> {
        self.app_id.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "No app selected. Pass --app-id or run 'variant-eval config set default_app_id <ID>'."
            )
        })
    }

    pub fn output_format(&self) -> OutputFormat {
        self.config.output_format
    }

    /// Print a value in the configured format
    pub fn print<T, F>(&self, value: &T, table: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce() -> Result<String>,
    {
        println!("{}", render(self.output_format(), value, table)?);
        Ok(())
    }

    /// Print a list in the configured format, or `empty` when there is
    /// nothing to show outside JSON mode
    pub fn print_list<T, F>(&self, items: &[T], empty: &str, table: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce() -> Result<String>,
    {
        println!("{}", render_list(self.output_format(), items, empty, table)?);
        Ok(())
    }

    /// Report a mutation. The backend response is passed through untouched
    /// and only shown as JSON.
    pub fn report_mutation(&self, message: &str, response: &Value) -> Result<()> {
        if self.output_format() == OutputFormat::Json {
            println!("{}", JsonFormatter::format(response)?);
            return Ok(());
        }

        println!("{}", colors::success(message));
        if self.config.debug && !response.is_null() {
            println!("{}", JsonFormatter::format(response)?);
        }
        Ok(())
    }
}
