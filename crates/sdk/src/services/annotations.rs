//! Annotation service
//!
//! Service for annotation runs and annotation scenarios. Mirrors the
//! evaluation service on the `/api/annotations/` resource path.

use crate::client::Client;
use crate::error::{SdkError, SdkResult};
use crate::models::{
    app_scoped_body, Annotation, AnnotationScenario, AnnotationScenarioUpdate,
    CreateAnnotationRequest, StatusProjection,
};
use crate::transport::ApiRequest;
use serde_json::{json, Value};
use tracing::debug;
use variant_eval_domain::{
    annotation::{decorate_annotation_scenarios, RawAnnotation, RawAnnotationScenario},
    identifiers::AnnotationId,
};

const ANNOTATIONS_PATH: &str = "/api/annotations/";

/// Service for annotation operations
#[derive(Clone)]
pub struct AnnotationService {
    client: Client,
}

impl AnnotationService {
    /// Create a new annotation service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the annotations of an app, in server order
    pub async fn fetch_all(&self, app_id: &str) -> SdkResult<Vec<Annotation>> {
        let records: Vec<RawAnnotation> =
            self.client.get_for_app(ANNOTATIONS_PATH, app_id).await?;

        let annotations = records
            .into_iter()
            .map(Annotation::from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(app_id, count = annotations.len(), "Fetched annotations");
        Ok(annotations)
    }

    /// Get one annotation
    pub async fn fetch(&self, annotation_id: &str) -> SdkResult<Annotation> {
        let record: RawAnnotation = self
            .client
            .get(&format!("{}{}/", ANNOTATIONS_PATH, annotation_id))
            .await?;

        Annotation::from_raw(record).map_err(SdkError::from)
    }

    /// Get only the status of an annotation
    pub async fn fetch_status(&self, annotation_id: &str) -> SdkResult<StatusProjection> {
        self.client
            .get(&format!("{}{}/status/", ANNOTATIONS_PATH, annotation_id))
            .await
    }

    /// List the scenarios of an annotation, each attached to the annotation.
    ///
    /// Both requests run concurrently and must both succeed.
    pub async fn fetch_all_scenarios(
        &self,
        app_id: &str,
        annotation_id: &str,
    ) -> SdkResult<Vec<AnnotationScenario>> {
        let scenarios_path = format!(
            "{}{}/annotation_scenarios/",
            ANNOTATIONS_PATH, annotation_id
        );

        let (records, annotation) = futures::try_join!(
            self.client
                .get_for_app::<Vec<RawAnnotationScenario>>(&scenarios_path, app_id),
            self.fetch(annotation_id),
        )?;

        debug!(
            annotation_id,
            count = records.len(),
            "Fetched annotation scenarios"
        );
        Ok(decorate_annotation_scenarios(records, &annotation))
    }

    /// Start an annotation for an app
    pub async fn create(
        &self,
        app_id: &str,
        annotation: &CreateAnnotationRequest,
    ) -> SdkResult<Value> {
        let body = app_scoped_body(annotation, app_id)?;
        self.client
            .send(ApiRequest::post(ANNOTATIONS_PATH).with_body(body))
            .await
    }

    /// Delete several annotations at once
    pub async fn delete(&self, annotation_ids: &[AnnotationId]) -> SdkResult<Value> {
        self.client
            .send(
                ApiRequest::delete(ANNOTATIONS_PATH)
                    .with_body(json!({ "annotations_ids": annotation_ids })),
            )
            .await
    }

    /// Update the pinned flag, note or result of one annotation scenario
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use variant_eval_sdk::{AnnotationScenarioUpdate, Client};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().base_url("http://localhost").build()?;
    ///
    /// let update = AnnotationScenarioUpdate::new().pinned(true).note("tone is off");
    /// client
    ///     .annotations()
    ///     .update_scenario("annotation-id", "scenario-id", &update)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_scenario(
        &self,
        annotation_id: &str,
        scenario_id: &str,
        update: &AnnotationScenarioUpdate,
    ) -> SdkResult<Value> {
        let body = serde_json::to_value(update)?;
        self.client
            .send(
                ApiRequest::put(format!(
                    "{}{}/annotation_scenarios/{}",
                    ANNOTATIONS_PATH, annotation_id, scenario_id
                ))
                .with_body(body),
            )
            .await
    }
}
