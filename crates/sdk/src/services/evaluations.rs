//! Evaluation service
//!
//! Service for evaluation runs and their scenarios.

use crate::client::Client;
use crate::error::{SdkError, SdkResult};
use crate::models::{
    app_scoped_body, CreateEvaluationRequest, Evaluation, EvaluationScenario, StatusProjection,
};
use crate::transport::ApiRequest;
use serde_json::{json, Value};
use tracing::debug;
use variant_eval_domain::{
    evaluation::RawEvaluation,
    identifiers::EvaluationId,
    scenario::{decorate_scenarios, RawEvaluationScenario},
};

const EVALUATIONS_PATH: &str = "/api/evaluations/";

/// Service for evaluation operations
#[derive(Clone)]
pub struct EvaluationService {
    client: Client,
}

impl EvaluationService {
    /// Create a new evaluation service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the evaluations of an app, in server order
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use variant_eval_sdk::Client;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().base_url("http://localhost").build()?;
    ///
    /// for evaluation in client.evaluations().fetch_all("app-id").await? {
    ///     println!("{} {} {}ms", evaluation.id, evaluation.status, evaluation.duration_ms);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_all(&self, app_id: &str) -> SdkResult<Vec<Evaluation>> {
        let records: Vec<RawEvaluation> =
            self.client.get_for_app(EVALUATIONS_PATH, app_id).await?;

        let evaluations = records
            .into_iter()
            .map(Evaluation::from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(app_id, count = evaluations.len(), "Fetched evaluations");
        Ok(evaluations)
    }

    /// Get one evaluation.
    ///
    /// A missing evaluation surfaces as [`SdkError::NotFound`].
    pub async fn fetch(&self, evaluation_id: &str) -> SdkResult<Evaluation> {
        let record: RawEvaluation = self
            .client
            .get(&format!("{}{}/", EVALUATIONS_PATH, evaluation_id))
            .await?;

        Evaluation::from_raw(record).map_err(SdkError::from)
    }

    /// Get only the status of an evaluation
    pub async fn fetch_status(&self, evaluation_id: &str) -> SdkResult<StatusProjection> {
        self.client
            .get(&format!("{}{}/status/", EVALUATIONS_PATH, evaluation_id))
            .await
    }

    /// List the scenarios of an evaluation, each attached to the evaluation.
    ///
    /// The scenario list and the evaluation are requested concurrently. If
    /// either request fails the whole call fails and no scenario is returned.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use variant_eval_sdk::Client;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().base_url("http://localhost").build()?;
    ///
    /// let scenarios = client
    ///     .evaluations()
    ///     .fetch_all_scenarios("app-id", "evaluation-id")
    ///     .await?;
    /// for scenario in scenarios {
    ///     println!("{} scored by {} configs", scenario.id(), scenario.evaluators_configs.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_all_scenarios(
        &self,
        app_id: &str,
        evaluation_id: &str,
    ) -> SdkResult<Vec<EvaluationScenario>> {
        let scenarios_path = format!(
            "{}{}/evaluation_scenarios/",
            EVALUATIONS_PATH, evaluation_id
        );

        let (records, evaluation) = futures::try_join!(
            self.client
                .get_for_app::<Vec<RawEvaluationScenario>>(&scenarios_path, app_id),
            self.fetch(evaluation_id),
        )?;

        debug!(
            evaluation_id,
            count = records.len(),
            "Fetched evaluation scenarios"
        );
        Ok(decorate_scenarios(records, &evaluation))
    }

    /// Start an evaluation for an app
    pub async fn create(
        &self,
        app_id: &str,
        evaluation: &CreateEvaluationRequest,
    ) -> SdkResult<Value> {
        let body = app_scoped_body(evaluation, app_id)?;
        self.client
            .send(ApiRequest::post(EVALUATIONS_PATH).with_body(body))
            .await
    }

    /// Delete several evaluations at once
    pub async fn delete(&self, evaluation_ids: &[EvaluationId]) -> SdkResult<Value> {
        self.client
            .send(
                ApiRequest::delete(EVALUATIONS_PATH)
                    .with_body(json!({ "evaluations_ids": evaluation_ids })),
            )
            .await
    }
}
