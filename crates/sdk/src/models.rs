//! SDK request models
//!
//! Request bodies for the mutation endpoints. Response shapes live in the
//! domain crate and are re-exported here for convenience.

use crate::error::{SdkError, SdkResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Re-export domain types for convenience
pub use variant_eval_domain::{
    annotation::{Annotation, AnnotationScenario},
    evaluation::{AggregatedResult, Evaluation, EvaluatorConfigRef, TypedValue, VariantRef},
    evaluator::{Evaluator, EvaluatorConfig},
    scenario::EvaluationScenario,
    status::{EvaluationStatus, StatusProjection},
};

// ============================================================================
// Evaluator Config Models
// ============================================================================

/// Request to create an evaluator config.
///
/// Server-assigned fields (`id`, `created_at`) are not part of the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEvaluatorConfigRequest {
    /// Display name
    pub name: String,
    /// Key of the evaluator being configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluator_key: Option<String>,
    /// Evaluator settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_values: Option<Map<String, Value>>,
}

impl CreateEvaluatorConfigRequest {
    /// Create a request with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            evaluator_key: None,
            settings_values: None,
        }
    }

    /// Set the evaluator key
    pub fn with_evaluator_key(mut self, key: impl Into<String>) -> Self {
        self.evaluator_key = Some(key.into());
        self
    }

    /// Set the evaluator settings
    pub fn with_settings_values(mut self, settings: Map<String, Value>) -> Self {
        self.settings_values = Some(settings);
        self
    }
}

/// Partial update of an evaluator config; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateEvaluatorConfigRequest {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New evaluator key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluator_key: Option<String>,
    /// New evaluator settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_values: Option<Map<String, Value>>,
}

impl UpdateEvaluatorConfigRequest {
    /// Whether the update would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.evaluator_key.is_none() && self.settings_values.is_none()
    }
}

// ============================================================================
// Evaluation Models
// ============================================================================

/// Request to start an evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEvaluationRequest {
    /// Test set to run against
    pub testset_id: String,
    /// Variants under test
    pub variant_ids: Vec<String>,
    /// Evaluator configs that score the run
    pub evaluators_configs: Vec<String>,
}

// ============================================================================
// Annotation Models
// ============================================================================

/// Request to start an annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAnnotationRequest {
    /// Kind of annotation, e.g. `flag` or `comparison`
    pub annotation_name: String,
    /// Test set to annotate
    pub testset_id: String,
    /// Variants under annotation
    pub variant_ids: Vec<String>,
}

/// Partial update of an annotation scenario.
///
/// Only `is_pinned`, `note` and `result` can be changed after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationScenarioUpdate {
    /// Pin or unpin the row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Annotation outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TypedValue>,
}

impl AnnotationScenarioUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pinned flag
    pub fn pinned(mut self, is_pinned: bool) -> Self {
        self.is_pinned = Some(is_pinned);
        self
    }

    /// Set the note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the result
    pub fn result(mut self, result: TypedValue) -> Self {
        self.result = Some(result);
        self
    }
}

/// Serialize a payload and add the owning `app_id` to it
pub(crate) fn app_scoped_body<T: Serialize>(payload: &T, app_id: &str) -> SdkResult<Value> {
    match serde_json::to_value(payload)? {
        Value::Object(mut body) => {
            body.insert("app_id".to_string(), Value::String(app_id.to_string()));
            Ok(Value::Object(body))
        }
        other => Err(SdkError::SerializationError {
            message: format!("Expected a JSON object payload, got {}", other),
            source: None,
        }),
    }
}
