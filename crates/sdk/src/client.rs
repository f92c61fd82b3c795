//! SDK client implementation
//!
//! This module provides the main client for interacting with the evaluation API.

use crate::config::ClientConfig;
use crate::error::{SdkError, SdkResult};
use crate::services::{AnnotationService, EvaluationService, EvaluatorService};
use crate::transport::{ApiRequest, HttpTransport, Transport};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::error;

/// Main SDK client
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl Client {
    /// Create a new client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new client that talks HTTP with the given configuration
    pub fn new(config: ClientConfig) -> SdkResult<Self> {
        let transport = HttpTransport::new(config.clone())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over an existing transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: Arc::new(ClientInner { transport, config }),
        }
    }

    /// Create a client from environment variables
    pub fn from_env() -> SdkResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Get the evaluator and evaluator config service
    pub fn evaluators(&self) -> EvaluatorService {
        EvaluatorService::new(self.clone())
    }

    /// Get the evaluation service
    pub fn evaluations(&self) -> EvaluationService {
        EvaluationService::new(self.clone())
    }

    /// Get the annotation service
    pub fn annotations(&self) -> AnnotationService {
        AnnotationService::new(self.clone())
    }

    /// Send a request and return the raw response body
    pub(crate) async fn send(&self, request: ApiRequest) -> SdkResult<Value> {
        self.inner.transport.send(request).await
    }

    /// Send a request and decode the response body
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> SdkResult<T> {
        let path = request.path.clone();
        let body = self.send(request).await?;
        decode(&path, body)
    }

    /// Make a GET request
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> SdkResult<T> {
        self.fetch(ApiRequest::get(path)).await
    }

    /// Make a GET request scoped to an app
    pub(crate) async fn get_for_app<T: DeserializeOwned>(
        &self,
        path: &str,
        app_id: &str,
    ) -> SdkResult<T> {
        self.fetch(ApiRequest::get(path).with_query("app_id", app_id))
            .await
    }
}

/// Decode a response body; a body of the wrong shape is an invalid response
pub(crate) fn decode<T: DeserializeOwned>(path: &str, body: Value) -> SdkResult<T> {
    serde_json::from_value(body).map_err(|e| {
        error!("Failed to decode response from {}: {}", path, e);
        SdkError::invalid_response(format!("Unexpected response from {}: {}", path, e))
    })
}

/// Client builder for ergonomic configuration
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment
    pub fn from_env(mut self) -> SdkResult<Self> {
        self.config = ClientConfig::from_env()?;
        Ok(self)
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Enable debug mode
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Use a custom transport instead of HTTP
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client
    pub fn build(self) -> SdkResult<Client> {
        match self.transport {
            Some(transport) => Ok(Client::with_transport(self.config, transport)),
            None => Client::new(self.config),
        }
    }
}
