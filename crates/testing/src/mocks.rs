//! Mock transport for exercising services without a backend.
//!
//! [`MockTransport`] answers requests from a route table, records every
//! request it sees, and can be told to fail specific routes.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Barrier;
use variant_eval_sdk::{ApiRequest, Method, SdkError, SdkResult, Transport};

#[derive(Clone)]
enum MockResponse {
    Json(Value),
    Status { status: u16, message: String },
}

#[derive(Clone)]
struct MockRoute {
    method: Method,
    path: String,
    response: MockResponse,
}

/// Recording, fault-injecting transport
pub struct MockTransport {
    routes: Arc<RwLock<Vec<MockRoute>>>,
    requests: Arc<RwLock<Vec<ApiRequest>>>,
    rendezvous: Option<Arc<Barrier>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            routes: Arc::new(RwLock::new(Vec::new())),
            requests: Arc::new(RwLock::new(Vec::new())),
            rendezvous: None,
        }
    }

    /// Answer `method path` with a JSON body
    pub fn on(self, method: Method, path: impl Into<String>, body: Value) -> Self {
        self.routes.write().push(MockRoute {
            method,
            path: path.into(),
            response: MockResponse::Json(body),
        });
        self
    }

    /// Answer `method path` with an error status
    pub fn fail(
        self,
        method: Method,
        path: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        self.routes.write().push(MockRoute {
            method,
            path: path.into(),
            response: MockResponse::Status {
                status,
                message: message.into(),
            },
        });
        self
    }

    /// Hold every response until `parties` requests are in flight at once.
    ///
    /// Sequential callers never get past the first request.
    pub fn with_rendezvous(mut self, parties: usize) -> Self {
        self.rendezvous = Some(Arc::new(Barrier::new(parties)));
        self
    }

    /// All requests received so far, in arrival order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.read().clone()
    }

    /// Requests received for a given path
    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.requests
            .read()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.read().len()
    }

    pub fn clear(&self) {
        self.requests.write().clear();
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> SdkResult<Value> {
        self.requests.write().push(request.clone());

        if let Some(ref barrier) = self.rendezvous {
            barrier.wait().await;
        }

        let route = self
            .routes
            .read()
            .iter()
            .find(|r| r.method == request.method && r.path == request.path)
            .cloned();

        match route.map(|r| r.response) {
            Some(MockResponse::Json(body)) => Ok(body),
            Some(MockResponse::Status { status, message }) => {
                Err(SdkError::from_status(status, &request.path, message))
            }
            None => Err(SdkError::from_status(
                404,
                &request.path,
                format!("No mock route for {} {}", request.method, request.path),
            )),
        }
    }
}
