//! Output formatting for CLI

use anyhow::Result;
use serde::{Deserialize, Serialize};

mod formatters;
mod table;

pub use formatters::{format_duration_ms, format_timestamp, JsonFormatter, PlainFormatter};
pub use table::TableFormatter;

/// Output format enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Plain text output
    Plain,
}

impl OutputFormat {
    /// Parse output format from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "table" => Some(Self::Table),
            "plain" => Some(Self::Plain),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// Render a value in the requested format.
///
/// `table` is only called for [`OutputFormat::Table`].
pub fn render<T, F>(format: OutputFormat, value: &T, table: F) -> Result<String>
where
    T: Serialize,
    F: FnOnce() -> Result<String>,
{
    match format {
        OutputFormat::Json => JsonFormatter::format(value),
        OutputFormat::Plain => PlainFormatter::format(value),
        OutputFormat::Table => table(),
    }
}

/// Render a list of records.
///
/// An empty list renders as `empty` in table and plain mode. JSON mode always
/// renders the array itself.
pub fn render_list<T, F>(
    format: OutputFormat,
    items: &[T],
    empty: &str,
    table: F,
) -> Result<String>
where
    T: Serialize,
    F: FnOnce() -> Result<String>,
{
    if items.is_empty() && format != OutputFormat::Json {
        return Ok(colors::warning(empty).to_string());
    }
    render(format, &items, table)
}

/// Color helpers
pub mod colors {
    use colored::*;
    use variant_eval_domain::EvaluationStatus;

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn info(s: &str) -> ColoredString {
        s.blue()
    }

    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    pub fn bold(s: &str) -> ColoredString {
        s.bold()
    }

    /// Status label colored by lifecycle stage
    pub fn status(status: EvaluationStatus) -> ColoredString {
        let label = status.display_name();
        match status {
            EvaluationStatus::Finished => success(label),
            EvaluationStatus::Error => error(label),
            EvaluationStatus::Initialized | EvaluationStatus::Started => info(label),
            EvaluationStatus::Unknown => dim(label),
        }
    }
}
