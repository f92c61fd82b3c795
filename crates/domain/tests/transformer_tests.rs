//! Tests for the evaluation entity transformer
//!
//! Covers variant zipping, defaults for missing aggregates, shape errors and
//! the derived duration.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use serde_json::{json, Value};
use variant_eval_domain::{
    evaluation::{Evaluation, RawEvaluation, VariantRef},
    DomainError, EvaluationId, EvaluationStatus,
};

fn base_record() -> Value {
    json!({
        "id": "e1",
        "app_id": "a1",
        "created_at": "2024-03-01T08:00:00Z",
        "updated_at": "2024-03-01T08:02:00Z",
        "status": "EVALUATION_FINISHED",
        "testset_id": "t1",
        "testset_name": "capitals",
        "user_id": "u1",
        "user_username": "alice",
        "variant_ids": ["v1", "v2"],
        "variant_names": ["V1", "V2"],
        "aggregated_results": [{"evaluator_config": "c1"}]
    })
}

fn transform(value: Value) -> Result<Evaluation, DomainError> {
    let raw: RawEvaluation = serde_json::from_value(value).expect("record should deserialize");
    Evaluation::from_raw(raw)
}

// ============================================================================
// Shape
// ============================================================================

#[test]
fn test_transform_keeps_typed_id() {
    let evaluation = transform(base_record()).unwrap();

    let id: &EvaluationId = &evaluation.id;
    assert_eq!(id, &EvaluationId::new("e1"));

    let value = serde_json::to_value(&evaluation).unwrap();
    assert_eq!(value["id"], json!("e1"));
}

#[test]
fn test_transform_reference_record() {
    let evaluation = transform(base_record()).unwrap();

    assert_eq!(evaluation.id, "e1");
    assert_eq!(evaluation.app_id, "a1");
    assert_eq!(evaluation.status, EvaluationStatus::Finished);
    assert_eq!(evaluation.testset.id, "t1");
    assert_eq!(evaluation.testset.name, "capitals");
    assert_eq!(evaluation.user.id, "u1");
    assert_eq!(evaluation.user.username, "alice");
    assert_eq!(
        evaluation.variants,
        vec![
            VariantRef {
                variant_id: "v1".into(),
                variant_name: "V1".to_string()
            },
            VariantRef {
                variant_id: "v2".into(),
                variant_name: "V2".to_string()
            },
        ]
    );

    let value = serde_json::to_value(&evaluation).unwrap();
    assert_eq!(
        value["variants"],
        json!([
            {"variantId": "v1", "variantName": "V1"},
            {"variantId": "v2", "variantName": "V2"}
        ])
    );
    assert_eq!(value["aggregated_results"], json!([{"evaluator_config": "c1"}]));
    assert_eq!(value["duration"], json!(120_000));
}

#[test]
fn test_missing_or_null_aggregated_results_default_to_empty() {
    let mut record = base_record();
    record["aggregated_results"] = Value::Null;
    assert!(transform(record).unwrap().aggregated_results.is_empty());

    let mut record = base_record();
    record.as_object_mut().unwrap().remove("aggregated_results");
    assert!(transform(record).unwrap().aggregated_results.is_empty());
}

#[test]
fn test_embedded_evaluator_config_is_accepted() {
    let mut record = base_record();
    record["aggregated_results"] = json!([{
        "evaluator_config": {
            "id": "c9",
            "evaluator_key": "auto_exact_match",
            "name": "exact",
            "settings_values": {},
            "created_at": "2024-03-01T07:00:00"
        },
        "result": {"type": "number", "value": 0.75}
    }]);

    let evaluation = transform(record).unwrap();
    assert_eq!(evaluation.evaluator_configs()[0].id(), "c9");
}

#[test]
fn test_unknown_status_is_preserved_as_unknown() {
    let mut record = base_record();
    record["status"] = json!("EVALUATION_AGGREGATION_FAILED");
    assert_eq!(transform(record).unwrap().status, EvaluationStatus::Unknown);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_variant_length_mismatch_is_malformed() {
    let mut record = base_record();
    record["variant_names"] = json!(["V1"]);

    let err = transform(record).unwrap_err();
    match err {
        DomainError::MalformedRecord { id, reason } => {
            assert_eq!(id, "e1");
            assert!(reason.contains("variant_ids has 2"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_required_field_is_shape_error() {
    for field in ["id", "app_id", "status", "testset_id", "variant_ids", "created_at"] {
        let mut record = base_record();
        record.as_object_mut().unwrap().remove(field);
        let result = serde_json::from_value::<RawEvaluation>(record);
        assert!(result.is_err(), "missing {field} should not deserialize");
    }
}

#[test]
fn test_bad_timestamp_is_shape_error() {
    let mut record = base_record();
    record["created_at"] = json!("not a date");
    let err = serde_json::from_value::<RawEvaluation>(record).unwrap_err();
    assert!(err.to_string().contains("Invalid timestamp"));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_transform_is_deterministic_for_fixed_clock() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let mut record = base_record();
    record["status"] = json!("EVALUATION_STARTED");

    let raw: RawEvaluation = serde_json::from_value(record).unwrap();
    let a = Evaluation::from_raw_at(raw.clone(), now).unwrap();
    let b = Evaluation::from_raw_at(raw, now).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.duration_ms, 60 * 60 * 1000);
}

proptest! {
    #[test]
    fn prop_variants_align_with_parallel_arrays(
        pairs in prop::collection::vec(("[a-z0-9]{1,12}", "[A-Za-z .]{0,16}"), 0..20)
    ) {
        let (ids, names): (Vec<String>, Vec<String>) = pairs.iter().cloned().unzip();
        let mut record = base_record();
        record["variant_ids"] = json!(ids);
        record["variant_names"] = json!(names);

        let evaluation = transform(record).unwrap();
        prop_assert_eq!(evaluation.variants.len(), pairs.len());
        for (i, variant) in evaluation.variants.iter().enumerate() {
            prop_assert_eq!(variant.variant_id.as_str(), ids[i].as_str());
            prop_assert_eq!(&variant.variant_name, &names[i]);
        }
    }

    #[test]
    fn prop_mismatched_arrays_never_transform(
        ids in prop::collection::vec("[a-z]{1,6}", 0..8),
        extra in 1usize..4
    ) {
        let names: Vec<String> = (0..ids.len() + extra).map(|i| format!("n{i}")).collect();
        let mut record = base_record();
        record["variant_ids"] = json!(ids);
        record["variant_names"] = json!(names);

        let is_malformed = matches!(transform(record), Err(DomainError::MalformedRecord { .. }));
        prop_assert!(is_malformed);
    }
}
