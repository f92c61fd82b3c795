//! Evaluator catalog entries and app-scoped evaluator configs.
//!
//! Catalog entries are decorated client-side with an icon and a tag color.
//! Both are pure functions of the evaluator key, so the same key always gets
//! the same decoration.

use crate::identifiers::*;
use crate::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Key prefix of evaluators that are driven by human feedback
pub const HUMAN_EVALUATOR_PREFIX: &str = "human";

/// Icons for the built-in automatic evaluators
pub const EVALUATOR_ICONS: &[(&str, &str)] = &[
    ("auto_exact_match", "/assets/evaluators/target.png"),
    ("auto_similarity_match", "/assets/evaluators/transparency.png"),
    ("auto_regex_test", "/assets/evaluators/programming.png"),
    ("auto_webhook_test", "/assets/evaluators/link.png"),
    ("auto_ai_critique", "/assets/evaluators/artificial-intelligence.png"),
    ("auto_custom_code_run", "/assets/evaluators/browser.png"),
];

/// Tag color palette evaluator keys are hashed into
pub const TAG_COLORS: &[&str] = &[
    "blue", "purple", "cyan", "green", "magenta", "pink", "red", "orange", "yellow", "volcano",
    "geekblue", "lime", "gold",
];

/// Evaluator catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluator {
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub settings_template: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_use: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Evaluator {
    /// Whether this evaluator relies on human feedback
    pub fn is_human(&self) -> bool {
        self.key.starts_with(HUMAN_EVALUATOR_PREFIX)
    }

    /// Attach the icon and tag color derived from the key
    pub fn decorated(mut self) -> Self {
        self.icon_url = evaluator_icon(&self.key).map(str::to_string);
        self.color = Some(tag_color(&self.key).to_string());
        self
    }
}

/// Look up the icon for an evaluator key; unknown keys have no icon
pub fn evaluator_icon(key: &str) -> Option<&'static str> {
    EVALUATOR_ICONS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, icon)| *icon)
}

/// Tag color for an evaluator key
pub fn tag_color(key: &str) -> &'static str {
    TAG_COLORS[string_to_number_in_range(key, 0, TAG_COLORS.len() - 1)]
}

/// Map a string onto `[min, max]` by summing its UTF-16 code units.
///
/// Returns `min` when the range is empty.
pub fn string_to_number_in_range(text: &str, min: usize, max: usize) -> usize {
    if max < min {
        return min;
    }

    let hash: u64 = text.encode_utf16().map(u64::from).sum();
    let range = (max - min + 1) as u64;
    (hash % range) as usize + min
}

/// Drop human evaluators and decorate the rest, preserving catalog order
pub fn decorate_catalog(entries: Vec<Evaluator>) -> Vec<Evaluator> {
    entries
        .into_iter()
        .filter(|entry| !entry.is_human())
        .map(Evaluator::decorated)
        .collect()
}

/// App-scoped configured instance of an evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    pub id: EvaluatorConfigId,
    pub evaluator_key: String,
    pub name: String,
    #[serde(default)]
    pub settings_values: serde_json::Map<String, serde_json::Value>,
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}
