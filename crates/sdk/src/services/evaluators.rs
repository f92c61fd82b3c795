//! Evaluator service
//!
//! Service for the evaluator catalog and app-scoped evaluator configs.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{
    app_scoped_body, CreateEvaluatorConfigRequest, Evaluator, EvaluatorConfig,
    UpdateEvaluatorConfigRequest,
};
use crate::transport::ApiRequest;
use serde_json::Value;
use tracing::debug;
use variant_eval_domain::evaluator::{decorate_catalog, evaluator_icon};

const EVALUATORS_PATH: &str = "/api/evaluators/";
const CONFIGS_PATH: &str = "/api/evaluators/configs/";

/// Service for evaluator operations
#[derive(Clone)]
pub struct EvaluatorService {
    client: Client,
}

impl EvaluatorService {
    /// Create a new evaluator service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the evaluator catalog.
    ///
    /// Human evaluators are dropped. Every remaining entry gets a tag color
    /// derived from its key, and an icon when the key is a known built-in.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use variant_eval_sdk::Client;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().base_url("http://localhost").build()?;
    ///
    /// for evaluator in client.evaluators().fetch_all().await? {
    ///     println!("{} ({:?})", evaluator.name, evaluator.color);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_all(&self) -> SdkResult<Vec<Evaluator>> {
        let entries: Option<Vec<Evaluator>> = self.client.get(EVALUATORS_PATH).await?;
        let entries = entries.unwrap_or_default();
        let total = entries.len();

        for entry in entries.iter().filter(|e| !e.is_human()) {
            if evaluator_icon(&entry.key).is_none() {
                debug!(key = %entry.key, "No icon mapped for evaluator");
            }
        }

        let catalog = decorate_catalog(entries);
        debug!(
            total,
            kept = catalog.len(),
            "Fetched evaluator catalog"
        );
        Ok(catalog)
    }

    /// List the evaluator configs of an app
    pub async fn fetch_all_configs(&self, app_id: &str) -> SdkResult<Vec<EvaluatorConfig>> {
        self.client.get_for_app(CONFIGS_PATH, app_id).await
    }

    /// Create an evaluator config for an app
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use variant_eval_sdk::{Client, CreateEvaluatorConfigRequest};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().base_url("http://localhost").build()?;
    ///
    /// let request = CreateEvaluatorConfigRequest::new("exact")
    ///     .with_evaluator_key("auto_exact_match");
    /// client.evaluators().create_config("app-id", &request).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_config(
        &self,
        app_id: &str,
        config: &CreateEvaluatorConfigRequest,
    ) -> SdkResult<Value> {
        let body = app_scoped_body(config, app_id)?;
        self.client
            .send(ApiRequest::post(CONFIGS_PATH).with_body(body))
            .await
    }

    /// Update some fields of an evaluator config
    pub async fn update_config(
        &self,
        config_id: &str,
        config: &UpdateEvaluatorConfigRequest,
    ) -> SdkResult<Value> {
        let body = serde_json::to_value(config)?;
        self.client
            .send(ApiRequest::put(format!("{}{}/", CONFIGS_PATH, config_id)).with_body(body))
            .await
    }

    /// Delete an evaluator config
    pub async fn delete_config(&self, config_id: &str) -> SdkResult<Value> {
        self.client
            .send(ApiRequest::delete(format!("{}{}/", CONFIGS_PATH, config_id)))
            .await
    }
}
