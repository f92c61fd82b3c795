//! Evaluation records and the entity transformer.
//!
//! The backend returns evaluations as flat records with parallel arrays for
//! the variants under test. [`Evaluation::from_raw`] normalizes such a record
//! into the nested shape used by callers and attaches a derived duration.

use crate::errors::{DomainError, DomainResult};
use crate::evaluator::EvaluatorConfig;
use crate::identifiers::*;
use crate::status::EvaluationStatus;
use crate::timestamp;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Evaluation record as returned by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEvaluation {
    pub id: EvaluationId,
    pub app_id: AppId,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
    pub status: EvaluationStatus,
    pub testset_id: TestsetId,
    pub testset_name: String,
    pub user_id: UserId,
    pub user_username: String,
    pub variant_ids: Vec<VariantId>,
    pub variant_names: Vec<String>,
    #[serde(default)]
    pub aggregated_results: Option<Vec<AggregatedResult>>,
}

/// A value tagged with its type, as the backend stores inputs and results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedValue {
    #[serde(rename = "type")]
    pub value_type: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl TypedValue {
    /// Create a typed value
    pub fn new(value_type: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            value_type: value_type.into(),
            value,
        }
    }
}

/// Reference to the evaluator config that produced an aggregated result.
///
/// Depending on the endpoint the backend sends either the bare config id or
/// the embedded config object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvaluatorConfigRef {
    /// Config id only
    Id(EvaluatorConfigId),
    /// Full config object
    Config(Box<EvaluatorConfig>),
}

impl EvaluatorConfigRef {
    /// Identifier of the referenced config, whichever form was sent
    pub fn id(&self) -> &EvaluatorConfigId {
        match self {
            Self::Id(id) => id,
            Self::Config(config) => &config.id,
        }
    }
}

/// Summary score for one evaluator config across a whole evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResult {
    pub evaluator_config: EvaluatorConfigRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TypedValue>,
}

/// Test set a run was executed against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestsetRef {
    pub id: TestsetId,
    pub name: String,
}

/// User who started a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: UserId,
    pub username: String,
}

/// A variant under test, paired with its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRef {
    #[serde(rename = "variantId")]
    pub variant_id: VariantId,
    #[serde(rename = "variantName")]
    pub variant_name: String,
}

/// Normalized evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: EvaluationId,
    #[serde(rename = "appId")]
    pub app_id: AppId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: EvaluationStatus,
    pub testset: TestsetRef,
    pub user: UserRef,
    pub variants: Vec<VariantRef>,
    pub aggregated_results: Vec<AggregatedResult>,
    /// Derived run duration in milliseconds
    #[serde(rename = "duration")]
    pub duration_ms: i64,
}

impl Evaluation {
    /// Normalize a server record, measuring running evaluations against the
    /// current clock.
    pub fn from_raw(raw: RawEvaluation) -> DomainResult<Self> {
        Self::from_raw_at(raw, Utc::now())
    }

    /// Normalize a server record with an explicit reference time.
    ///
    /// `variant_ids` and `variant_names` are zipped index by index and must
    /// have the same length.
    pub fn from_raw_at(raw: RawEvaluation, now: DateTime<Utc>) -> DomainResult<Self> {
        if raw.variant_ids.len() != raw.variant_names.len() {
            return Err(DomainError::malformed(
                raw.id.as_str(),
                format!(
                    "variant_ids has {} entries but variant_names has {}",
                    raw.variant_ids.len(),
                    raw.variant_names.len()
                ),
            ));
        }

        let variants = raw
            .variant_ids
            .into_iter()
            .zip(raw.variant_names)
            .map(|(variant_id, variant_name)| VariantRef {
                variant_id,
                variant_name,
            })
            .collect();

        let mut evaluation = Self {
            id: raw.id,
            app_id: raw.app_id,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            status: raw.status,
            testset: TestsetRef {
                id: raw.testset_id,
                name: raw.testset_name,
            },
            user: UserRef {
                id: raw.user_id,
                username: raw.user_username,
            },
            variants,
            aggregated_results: raw.aggregated_results.unwrap_or_default(),
            duration_ms: 0,
        };

        evaluation.duration_ms = calc_duration(&evaluation, now).num_milliseconds();
        Ok(evaluation)
    }

    /// Derived run duration
    pub fn duration(&self) -> Duration {
        Duration::milliseconds(self.duration_ms)
    }

    /// Evaluator configs referenced by the aggregated results, in order
    pub fn evaluator_configs(&self) -> Vec<EvaluatorConfigRef> {
        self.aggregated_results
            .iter()
            .map(|result| result.evaluator_config.clone())
            .collect()
    }
}

/// Duration of a run.
///
/// Running runs are measured up to `now`; finished or failed runs up to their
/// last update. Clock skew never yields a negative duration.
pub fn calc_duration(evaluation: &Evaluation, now: DateTime<Utc>) -> Duration {
    let end = if evaluation.status.is_running() {
        now
    } else {
        evaluation.updated_at
    };

    (end - evaluation.created_at).max(Duration::zero())
}
