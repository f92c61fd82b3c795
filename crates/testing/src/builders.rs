//! Fluent builder pattern for constructing backend records.
//!
//! Builders produce `serde_json::Value`s shaped exactly like backend
//! responses, so they can be served from a mock transport or a wiremock
//! server and exercise the real deserialization path.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Value};

/// Builder for evaluation (and annotation) records
#[derive(Clone)]
pub struct EvaluationRecordBuilder {
    id: String,
    app_id: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    testset_id: String,
    testset_name: String,
    user_id: String,
    user_username: String,
    variant_ids: Vec<String>,
    variant_names: Vec<String>,
    aggregated_results: Option<Vec<Value>>,
    annotation_name: Option<String>,
}

impl EvaluationRecordBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        Self {
            id: id.into(),
            app_id: "app-1".to_string(),
            status: "EVALUATION_FINISHED".to_string(),
            created_at,
            updated_at: created_at + Duration::seconds(30),
            testset_id: "testset-1".to_string(),
            testset_name: "capitals".to_string(),
            user_id: "user-1".to_string(),
            user_username: "alice".to_string(),
            variant_ids: vec!["variant-1".to_string()],
            variant_names: vec!["app.default".to_string()],
            aggregated_results: Some(Vec::new()),
            annotation_name: None,
        }
    }

    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn running(self) -> Self {
        self.with_status("EVALUATION_STARTED")
    }

    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    pub fn with_testset(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.testset_id = id.into();
        self.testset_name = name.into();
        self
    }

    pub fn with_user(mut self, id: impl Into<String>, username: impl Into<String>) -> Self {
        self.user_id = id.into();
        self.user_username = username.into();
        self
    }

    /// Set matching variant id and name arrays
    pub fn with_variants(mut self, variants: &[(&str, &str)]) -> Self {
        self.variant_ids = variants.iter().map(|(id, _)| id.to_string()).collect();
        self.variant_names = variants.iter().map(|(_, name)| name.to_string()).collect();
        self
    }

    /// Override only the name array, e.g. to produce a length mismatch
    pub fn with_variant_names(mut self, names: &[&str]) -> Self {
        self.variant_names = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Aggregated results referencing configs by id
    pub fn with_aggregated_configs(mut self, config_ids: &[&str]) -> Self {
        self.aggregated_results = Some(
            config_ids
                .iter()
                .map(|id| json!({"evaluator_config": id, "result": {"type": "number", "value": 1.0}}))
                .collect(),
        );
        self
    }

    /// Send `aggregated_results: null`
    pub fn without_aggregated_results(mut self) -> Self {
        self.aggregated_results = None;
        self
    }

    pub fn with_annotation_name(mut self, name: impl Into<String>) -> Self {
        self.annotation_name = Some(name.into());
        self
    }

    pub fn build(self) -> Value {
        let mut record = json!({
            "id": self.id,
            "app_id": self.app_id,
            "created_at": self.created_at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            "updated_at": self.updated_at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            "status": self.status,
            "testset_id": self.testset_id,
            "testset_name": self.testset_name,
            "user_id": self.user_id,
            "user_username": self.user_username,
            "variant_ids": self.variant_ids,
            "variant_names": self.variant_names,
            "aggregated_results": self.aggregated_results,
        });

        if let Some(name) = self.annotation_name {
            record["annotation_name"] = Value::String(name);
        }

        record
    }
}

impl Default for EvaluationRecordBuilder {
    fn default() -> Self {
        Self::new("evaluation-1")
    }
}

/// Builder for evaluation scenario rows
#[derive(Clone)]
pub struct ScenarioRecordBuilder {
    id: String,
    parent_key: &'static str,
    parent_id: String,
    inputs: Vec<Value>,
    outputs: Vec<Value>,
    extra: Vec<(String, Value)>,
}

impl ScenarioRecordBuilder {
    /// Row of an evaluation
    pub fn evaluation(id: impl Into<String>, evaluation_id: impl Into<String>) -> Self {
        Self::with_parent(id, "evaluation_id", evaluation_id)
    }

    /// Row of an annotation
    pub fn annotation(id: impl Into<String>, annotation_id: impl Into<String>) -> Self {
        Self::with_parent(id, "annotation_id", annotation_id)
    }

    fn with_parent(id: impl Into<String>, parent_key: &'static str, parent_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_key,
            parent_id: parent_id.into(),
            inputs: vec![json!({"name": "country", "type": "text", "value": "France"})],
            outputs: vec![json!({"type": "text", "value": "Paris"})],
            extra: Vec::new(),
        }
    }

    pub fn with_input(mut self, name: &str, value: &str) -> Self {
        self.inputs.push(json!({"name": name, "type": "text", "value": value}));
        self
    }

    pub fn with_output(mut self, value: &str) -> Self {
        self.outputs = vec![json!({"type": "text", "value": value})];
        self
    }

    pub fn pinned(mut self) -> Self {
        self.extra.push(("is_pinned".to_string(), Value::Bool(true)));
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.extra.push(("note".to_string(), Value::String(note.to_string())));
        self
    }

    pub fn build(self) -> Value {
        let mut record = json!({
            "id": self.id,
            "inputs": self.inputs,
            "outputs": self.outputs,
        });
        record[self.parent_key] = Value::String(self.parent_id);
        for (key, value) in self.extra {
            record[key.as_str()] = value;
        }
        record
    }
}
