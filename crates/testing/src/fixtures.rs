//! Test fixtures for backend records with realistic data.
//!
//! This module provides functions that return backend-shaped JSON with
//! sensible defaults and randomized display fields.

use crate::builders::{EvaluationRecordBuilder, ScenarioRecordBuilder};
use fake::{
    faker::{internet::en::Username, lorem::en::Word},
    Fake,
};
use serde_json::{json, Value};

/// Create a finished evaluation record with randomized names
pub fn create_test_evaluation(id: &str, app_id: &str) -> Value {
    let variant_name = format!("app.{}", Word().fake::<String>());
    EvaluationRecordBuilder::new(id)
        .with_app_id(app_id)
        .with_user("user-1", Username().fake::<String>())
        .with_variants(&[("variant-1", variant_name.as_str())])
        .with_aggregated_configs(&["config-1", "config-2"])
        .build()
}

/// Create an annotation record
pub fn create_test_annotation(id: &str, app_id: &str) -> Value {
    EvaluationRecordBuilder::new(id)
        .with_app_id(app_id)
        .with_variants(&[("variant-1", "app.v1"), ("variant-2", "app.v2")])
        .with_annotation_name("comparison")
        .build()
}

/// Create `count` scenario rows for an evaluation
pub fn create_test_evaluation_scenarios(evaluation_id: &str, count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                ScenarioRecordBuilder::evaluation(format!("scenario-{}", i), evaluation_id)
                    .with_output(&Word().fake::<String>())
                    .build()
            })
            .collect(),
    )
}

/// Create `count` scenario rows for an annotation
pub fn create_test_annotation_scenarios(annotation_id: &str, count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                ScenarioRecordBuilder::annotation(format!("scenario-{}", i), annotation_id).build()
            })
            .collect(),
    )
}

/// Create an evaluator catalog entry
pub fn create_test_evaluator(key: &str) -> Value {
    json!({
        "name": key.replace('_', " "),
        "key": key,
        "direct_use": false,
        "settings_template": {
            "threshold": {"label": "Threshold", "type": "number", "default": 0.5}
        }
    })
}

/// Create a catalog that mixes built-in, custom and human evaluators
pub fn create_test_catalog() -> Value {
    Value::Array(vec![
        create_test_evaluator("auto_exact_match"),
        create_test_evaluator("human_a_b_testing"),
        create_test_evaluator("auto_regex_test"),
        create_test_evaluator("human_single_model_test"),
        create_test_evaluator("my_custom_scorer"),
    ])
}

/// Create an evaluator config record
pub fn create_test_evaluator_config(id: &str, evaluator_key: &str) -> Value {
    json!({
        "id": id,
        "evaluator_key": evaluator_key,
        "name": Word().fake::<String>(),
        "settings_values": {"threshold": 0.8},
        "created_at": "2024-01-09T08:30:00.000000"
    })
}
