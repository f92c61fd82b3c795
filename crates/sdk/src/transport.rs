//! Transport layer
//!
//! A [`Transport`] turns an [`ApiRequest`] into the parsed JSON body of a
//! successful response, or an [`SdkError`] for anything else. Services only
//! talk to the backend through this trait, so tests and embedders can swap in
//! their own implementation.

use crate::config::ClientConfig;
use crate::error::{FieldError, SdkError, SdkResult};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, warn};

pub use reqwest::Method;

/// A single backend request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the API base, e.g. `/api/evaluations/`
    pub path: String,
    /// Query string parameters
    pub query: Vec<(String, String)>,
    /// JSON body
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request without query or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Add a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Value of a query parameter, if present
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Request/response channel to the backend
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the parsed response body.
    ///
    /// Non-success statuses are returned as errors. An empty success body is
    /// returned as `Value::Null`.
    async fn send(&self, request: ApiRequest) -> SdkResult<Value>;
}

/// HTTP transport backed by reqwest
pub struct HttpTransport {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Create an HTTP transport for the given configuration
    pub fn new(config: ClientConfig) -> SdkResult<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("variant-eval-sdk")),
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| SdkError::ConfigError {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { http, config })
    }

    /// Configuration this transport was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Handle error response
    async fn handle_error_response(&self, path: &str, response: reqwest::Response) -> SdkError {
        let status_code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        warn!(status = status_code, path = %path, "SDK request failed");
        if self.config.debug {
            debug!("SDK error response ({}): {}", status_code, body);
        }

        error_from_body(status_code, path, &body)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> SdkResult<Value> {
        let url = self.config.url_for(&request.path);

        debug!(method = %request.method, path = %request.path, query = ?request.query, "SDK request");
        if self.config.debug {
            if let Some(ref body) = request.body {
                debug!("SDK request body: {}", body);
            }
        }

        let mut builder = self.http.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), path = %request.path, "SDK response");

        if !status.is_success() {
            return Err(self.handle_error_response(&request.path, response).await);
        }

        let text = response.text().await?;
        if self.config.debug {
            debug!("SDK response body: {}", text);
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse response: {}", e);
            SdkError::invalid_response(format!("Failed to parse response: {}", e))
        })
    }
}

/// Error body as produced by the backend
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    detail: Option<ErrorDetail>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationDetail>),
    Other(Value),
}

#[derive(Debug, Deserialize)]
struct ValidationDetail {
    #[serde(default)]
    loc: Vec<Value>,
    msg: String,
}

/// Map a non-success status and its body to an [`SdkError`]
pub(crate) fn error_from_body(status_code: u16, path: &str, body: &str) -> SdkError {
    let parsed = serde_json::from_str::<ApiErrorResponse>(body).ok();

    let (message, field_errors) = match parsed {
        Some(ApiErrorResponse {
            detail: Some(ErrorDetail::Message(message)),
            ..
        }) => (message, Vec::new()),
        Some(ApiErrorResponse {
            detail: Some(ErrorDetail::Validation(details)),
            ..
        }) => {
            let fields: Vec<FieldError> = details
                .into_iter()
                .map(|d| FieldError::new(render_loc(&d.loc), d.msg))
                .collect();
            let message = fields
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            (message, fields)
        }
        Some(ApiErrorResponse {
            detail: Some(ErrorDetail::Other(value)),
            ..
        }) => (value.to_string(), Vec::new()),
        Some(ApiErrorResponse {
            message: Some(message),
            ..
        }) => (message, Vec::new()),
        _ if body.is_empty() => (format!("HTTP {}", status_code), Vec::new()),
        _ => (body.to_string(), Vec::new()),
    };

    match SdkError::from_status(status_code, path, message) {
        SdkError::ValidationError { message, .. } => SdkError::ValidationError {
            message,
            field_errors,
        },
        other => other,
    }
}

fn render_loc(loc: &[Value]) -> String {
    loc.iter()
        .map(|part| match part {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builders() {
        let request = ApiRequest::get("/api/evaluations/")
            .with_query("app_id", "a1")
            .with_body(serde_json::json!({"x": 1}));

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/api/evaluations/");
        assert_eq!(request.query_param("app_id"), Some("a1"));
        assert_eq!(request.query_param("missing"), None);
        assert!(request.body.is_some());
    }

    #[test]
    fn test_error_from_detail_string() {
        let err = error_from_body(404, "/api/evaluations/e1/", r#"{"detail": "Not found"}"#);
        match err {
            SdkError::NotFound { path, message } => {
                assert_eq!(path, "/api/evaluations/e1/");
                assert_eq!(message, "Not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_from_validation_detail() {
        let body = r#"{"detail": [{"loc": ["body", "variant_ids", 0], "msg": "field required", "type": "value_error.missing"}]}"#;
        match error_from_body(422, "/api/evaluations/", body) {
            SdkError::ValidationError {
                message,
                field_errors,
            } => {
                assert_eq!(field_errors, vec![FieldError::new("body.variant_ids.0", "field required")]);
                assert_eq!(message, "body.variant_ids.0: field required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_from_plain_body() {
        match error_from_body(500, "/api/evaluators/", "Internal Server Error") {
            SdkError::ServerError {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        match error_from_body(502, "/", "") {
            SdkError::ServerError { message, .. } => assert_eq!(message, "HTTP 502"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_http_transport_rejects_bad_url() {
        let config = ClientConfig::new().with_base_url("::nope::");
        assert!(matches!(
            HttpTransport::new(config),
            Err(SdkError::ConfigError { .. })
        ));
    }
}
