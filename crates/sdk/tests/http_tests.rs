//! HTTP transport tests against a wiremock server
//!
//! Covers the wire contract: method, path, `app_id` query and JSON body of
//! every endpoint, plus mapping of error responses.

use serde_json::json;
use std::time::Duration;
use variant_eval_domain::{EvaluationId, EvaluationStatus};
use variant_eval_sdk::{
    AnnotationScenarioUpdate, Client, CreateEvaluatorConfigRequest, FieldError, SdkError,
    TypedValue, UpdateEvaluatorConfigRequest,
};
use variant_eval_testing::{builders::*, fixtures::*};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_list_evaluations_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/evaluations/"))
        .and(query_param("app_id", "app-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([create_test_evaluation("e1", "app-1")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let evaluations = client.evaluations().fetch_all("app-1").await.unwrap();

    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0].app_id, "app-1");
}

#[tokio::test]
async fn test_fetch_evaluation_with_rfc3339_timestamps() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/evaluations/e1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "e1",
            "app_id": "app-1",
            "created_at": "2024-01-10T12:00:00+00:00",
            "updated_at": "2024-01-10T12:00:02.500000+00:00",
            "status": "EVALUATION_FINISHED",
            "testset_id": "t1",
            "testset_name": "capitals",
            "user_id": "u1",
            "user_username": "alice",
            "variant_ids": ["v1"],
            "variant_names": ["app.default"],
            "aggregated_results": []
        })))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let evaluation = client.evaluations().fetch("e1").await.unwrap();

    assert_eq!(evaluation.duration_ms, 2_500);
    assert_eq!(evaluation.status, EvaluationStatus::Finished);
}

#[tokio::test]
async fn test_scenarios_over_http_send_app_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/evaluations/e1/evaluation_scenarios/"))
        .and(query_param("app_id", "app-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(create_test_evaluation_scenarios("e1", 2)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/evaluations/e1/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(create_test_evaluation("e1", "app-1")),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let scenarios = client
        .evaluations()
        .fetch_all_scenarios("app-1", "e1")
        .await
        .unwrap();

    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[0].evaluation.id, "e1");
}

#[tokio::test]
async fn test_delete_evaluations_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/evaluations/"))
        .and(body_json(json!({"evaluations_ids": ["e1", "e2"]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let response = client
        .evaluations()
        .delete(&[EvaluationId::from("e1"), EvaluationId::from("e2")])
        .await
        .unwrap();

    // Empty success bodies come back as null
    assert_eq!(response, serde_json::Value::Null);
}

#[tokio::test]
async fn test_create_config_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/evaluators/configs/"))
        .and(body_json(json!({"name": "cfg", "app_id": "a1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "c1", "name": "cfg"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let response = client
        .evaluators()
        .create_config("a1", &CreateEvaluatorConfigRequest::new("cfg"))
        .await
        .unwrap();

    assert_eq!(response["id"], "c1");
}

#[tokio::test]
async fn test_update_and_delete_config_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/evaluators/configs/c1/"))
        .and(body_json(json!({"settings_values": {"threshold": 0.9}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "c1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/evaluators/configs/c1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let mut settings = serde_json::Map::new();
    settings.insert("threshold".to_string(), json!(0.9));
    let update = UpdateEvaluatorConfigRequest {
        settings_values: Some(settings),
        ..Default::default()
    };

    client.evaluators().update_config("c1", &update).await.unwrap();
    let deleted = client.evaluators().delete_config("c1").await.unwrap();

    assert_eq!(deleted, json!(true));
}

#[tokio::test]
async fn test_update_annotation_scenario_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/annotations/a1/annotation_scenarios/s1"))
        .and(body_json(json!({"result": {"type": "text", "value": "variant-1"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "s1"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let update = AnnotationScenarioUpdate::new().result(TypedValue {
        value_type: "text".to_string(),
        value: json!("variant-1"),
    });
    client
        .annotations()
        .update_scenario("a1", "s1", &update)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_evaluator_catalog_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/evaluators/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_test_catalog()))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let catalog = client.evaluators().fetch_all().await.unwrap();

    assert_eq!(catalog.len(), 3);
    assert!(catalog.iter().all(|e| !e.key.starts_with("human")));
}

// ============================================================================
// Error mapping
// ============================================================================

#[tokio::test]
async fn test_not_found_detail_is_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/annotations/missing/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Annotation not found"})))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    match client.annotations().fetch("missing").await {
        Err(SdkError::NotFound { path, message }) => {
            assert_eq!(path, "/api/annotations/missing/");
            assert_eq!(message, "Annotation not found");
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_validation_detail_is_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/evaluators/configs/"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {"loc": ["body", "evaluator_key"], "msg": "field required", "type": "value_error.missing"}
            ]
        })))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let err = client
        .evaluators()
        .create_config("a1", &CreateEvaluatorConfigRequest::new("cfg"))
        .await
        .unwrap_err();

    match err {
        SdkError::ValidationError { field_errors, .. } => {
            assert_eq!(
                field_errors,
                vec![FieldError::new("body.evaluator_key", "field required")]
            );
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_is_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/evaluations/e1/status/"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let err = client.evaluations().fetch_status("e1").await.unwrap_err();

    assert_eq!(err.status_code(), Some(502));
    assert!(err.to_string().contains("HTTP 502"));
}

#[tokio::test]
async fn test_invalid_json_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/evaluators/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let err = client.evaluators().fetch_all().await.unwrap_err();

    assert!(matches!(err, SdkError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on the discard port
    let client = Client::builder()
        .base_url("http://127.0.0.1:9")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.evaluators().fetch_all().await.unwrap_err();

    assert!(matches!(
        err,
        SdkError::NetworkError { .. } | SdkError::Timeout
    ));
}
