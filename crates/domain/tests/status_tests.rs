//! Tests for run status values
//!
//! The backend owns the status lifecycle; these tests pin the wire strings
//! and the running/terminal classification the duration depends on.

use variant_eval_domain::{EvaluationStatus, StatusProjection};

#[test]
fn test_status_wire_values() {
    let cases = [
        ("EVALUATION_INITIALIZED", EvaluationStatus::Initialized),
        ("EVALUATION_STARTED", EvaluationStatus::Started),
        ("EVALUATION_FINISHED", EvaluationStatus::Finished),
        ("EVALUATION_ERROR", EvaluationStatus::Error),
    ];

    for (wire, status) in cases {
        let parsed: EvaluationStatus = serde_json::from_str(&format!("\"{wire}\"")).unwrap();
        assert_eq!(parsed, status);
        assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{wire}\""));
        assert_eq!(status.as_str(), wire);
    }
}

#[test]
fn test_unrecognized_status_parses_as_unknown() {
    let parsed: EvaluationStatus = serde_json::from_str("\"EVALUATION_PAUSED\"").unwrap();
    assert_eq!(parsed, EvaluationStatus::Unknown);
    assert!(!parsed.is_running());
    assert!(!parsed.is_terminal());
}

#[test]
fn test_running_and_terminal_are_disjoint() {
    // Running states
    assert!(EvaluationStatus::Initialized.is_running());
    assert!(EvaluationStatus::Started.is_running());

    // Terminal states
    assert!(EvaluationStatus::Finished.is_terminal());
    assert!(EvaluationStatus::Error.is_terminal());

    for status in [
        EvaluationStatus::Initialized,
        EvaluationStatus::Started,
        EvaluationStatus::Finished,
        EvaluationStatus::Error,
        EvaluationStatus::Unknown,
    ] {
        assert!(!(status.is_running() && status.is_terminal()));
    }
}

#[test]
fn test_status_display() {
    assert_eq!(EvaluationStatus::Started.to_string(), "Running");
    assert_eq!(EvaluationStatus::Error.to_string(), "Failed");
}

#[test]
fn test_status_projection() {
    let projection: StatusProjection =
        serde_json::from_str(r#"{"status": "EVALUATION_STARTED"}"#).unwrap();
    assert_eq!(projection.status, EvaluationStatus::Started);
}
