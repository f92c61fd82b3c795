//! Evaluation scenarios.
//!
//! A scenario is one test-set row within an evaluation. Scenario rows come
//! from their own endpoint and are decorated client-side with their parent
//! evaluation and a snapshot of its evaluator configs.

use crate::evaluation::{Evaluation, EvaluatorConfigRef, TypedValue};
use crate::identifiers::*;
use serde::{Deserialize, Serialize};

/// Named input fed to the variant for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Per-scenario score for one evaluator config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub evaluator_config: EvaluatorConfigId,
    pub result: TypedValue,
}

/// Scenario row as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvaluationScenario {
    pub id: EvaluationScenarioId,
    pub evaluation_id: EvaluationId,
    #[serde(default)]
    pub inputs: Vec<ScenarioInput>,
    #[serde(default)]
    pub outputs: Vec<TypedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<TypedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub results: Vec<ScenarioResult>,
}

/// Scenario row decorated with its parent evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationScenario {
    #[serde(flatten)]
    pub record: RawEvaluationScenario,
    /// Back-reference to the evaluation this row belongs to
    pub evaluation: Evaluation,
    /// Evaluator configs of the parent evaluation at decoration time
    pub evaluators_configs: Vec<EvaluatorConfigRef>,
}

impl EvaluationScenario {
    /// Attach a scenario row to its parent evaluation.
    ///
    /// `evaluators_configs` is copied from the evaluation's aggregated results
    /// and does not track later changes to the evaluation.
    pub fn attach(record: RawEvaluationScenario, evaluation: &Evaluation) -> Self {
        Self {
            record,
            evaluators_configs: evaluation.evaluator_configs(),
            evaluation: evaluation.clone(),
        }
    }

    /// Scenario identifier
    pub fn id(&self) -> &EvaluationScenarioId {
        &self.record.id
    }
}

/// Decorate every scenario row with the same parent evaluation
pub fn decorate_scenarios(
    records: Vec<RawEvaluationScenario>,
    evaluation: &Evaluation,
) -> Vec<EvaluationScenario> {
    records
        .into_iter()
        .map(|record| EvaluationScenario::attach(record, evaluation))
        .collect()
}
