//! Annotation runs and annotation scenarios.
//!
//! Annotations share the evaluation record layout and the same transformer,
//! but live under their own resource path and carry a few extra fields.

use crate::errors::DomainResult;
use crate::evaluation::{Evaluation, RawEvaluation, TypedValue};
use crate::identifiers::*;
use crate::scenario::ScenarioInput;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Annotation record as returned by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAnnotation {
    #[serde(flatten)]
    pub record: RawEvaluation,
    #[serde(default)]
    pub annotation_name: Option<String>,
}

/// Normalized annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(flatten)]
    pub run: Evaluation,
    /// Kind of annotation, e.g. `flag` or `comparison`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_name: Option<String>,
}

impl Annotation {
    /// Normalize a server record with the evaluation transformer
    pub fn from_raw(raw: RawAnnotation) -> DomainResult<Self> {
        Self::from_raw_at(raw, Utc::now())
    }

    /// Normalize a server record with an explicit reference time
    pub fn from_raw_at(raw: RawAnnotation, now: DateTime<Utc>) -> DomainResult<Self> {
        Ok(Self {
            run: Evaluation::from_raw_at(raw.record, now)?,
            annotation_name: raw.annotation_name,
        })
    }

    /// Annotation identifier.
    ///
    /// Annotations share the evaluation record layout, so the id is read from
    /// the wrapped run.
    pub fn id(&self) -> AnnotationId {
        AnnotationId::new(self.run.id.as_str())
    }
}

/// Annotation scenario row as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAnnotationScenario {
    pub id: AnnotationScenarioId,
    pub annotation_id: AnnotationId,
    #[serde(default)]
    pub inputs: Vec<ScenarioInput>,
    #[serde(default)]
    pub outputs: Vec<TypedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TypedValue>,
}

/// Annotation scenario row decorated with its parent annotation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationScenario {
    #[serde(flatten)]
    pub record: RawAnnotationScenario,
    pub annotation: Annotation,
}

impl AnnotationScenario {
    /// Attach a scenario row to its parent annotation
    pub fn attach(record: RawAnnotationScenario, annotation: &Annotation) -> Self {
        Self {
            record,
            annotation: annotation.clone(),
        }
    }
}

/// Decorate every annotation scenario row with the same parent annotation
pub fn decorate_annotation_scenarios(
    records: Vec<RawAnnotationScenario>,
    annotation: &Annotation,
) -> Vec<AnnotationScenario> {
    records
        .into_iter()
        .map(|record| AnnotationScenario::attach(record, annotation))
        .collect()
}
