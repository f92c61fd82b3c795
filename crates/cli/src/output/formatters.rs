//! Output formatters

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a value as pretty JSON
    pub fn format<T: Serialize>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

/// Plain text formatter
pub struct PlainFormatter;

impl PlainFormatter {
    /// Format a value as indented `key: value` lines
    pub fn format<T: Serialize>(value: &T) -> Result<String> {
        let json = serde_json::to_value(value)?;
        Ok(Self::format_value(&json, 0))
    }

    fn format_value(value: &serde_json::Value, indent: usize) -> String {
        let indent_str = "  ".repeat(indent);
        match value {
            serde_json::Value::Null => "null".to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(arr) => arr
                .iter()
                .map(|v| format!("{}  - {}", indent_str, Self::format_value(v, indent + 1)))
                .collect::<Vec<_>>()
                .join("\n"),
            serde_json::Value::Object(obj) => obj
                .iter()
                .map(|(k, v)| match v {
                    serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                        format!("{}{}:\n{}", indent_str, k, Self::format_value(v, indent + 1))
                    }
                    _ => format!("{}{}: {}", indent_str, k, Self::format_value(v, indent + 1)),
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Human-readable run duration, e.g. `2m 05s`
pub fn format_duration_ms(duration_ms: i64) -> String {
    let duration_ms = duration_ms.max(0);
    if duration_ms < 1_000 {
        return format!("{}ms", duration_ms);
    }

    let total_seconds = duration_ms / 1_000;
    let (hours, minutes, seconds) = (
        total_seconds / 3_600,
        (total_seconds % 3_600) / 60,
        total_seconds % 60,
    );

    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}.{}s", seconds, (duration_ms % 1_000) / 100)
    }
}

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        count: i32,
    }

    #[test]
    fn test_json_formatter() {
        let data = TestData {
            name: "test".to_string(),
            count: 42,
        };
        let result = JsonFormatter::format(&data).unwrap();
        assert!(result.contains("\"count\": 42"));
    }

    #[test]
    fn test_plain_formatter() {
        let data = TestData {
            name: "test".to_string(),
            count: 42,
        };
        let result = PlainFormatter::format(&data).unwrap();
        assert!(result.contains("name: test"));
        assert!(result.contains("count: 42"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(-5), "0ms");
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(2_500), "2.5s");
        assert_eq!(format_duration_ms(125_000), "2m 05s");
        assert_eq!(format_duration_ms(3_725_000), "1h 02m 05s");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-01-10 12:00:00");
    }
}
