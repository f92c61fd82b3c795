//! Evaluation commands

use anyhow::Result;

use crate::commands::CommandContext;
use crate::interactive::{confirm_unless, spinner};
use crate::output::{colors, format_duration_ms, format_timestamp, TableFormatter};
use variant_eval_domain::{Evaluation, EvaluationId, EvaluationScenario, TypedValue};
use variant_eval_sdk::CreateEvaluationRequest;

/// List the evaluations of the selected app
pub async fn list(ctx: &CommandContext) -> Result<()> {
    let app_id = ctx.require_app_id()?;

    let sp = spinner("Fetching evaluations...");
    let evaluations = ctx.client.evaluations().fetch_all(app_id).await;
    sp.finish_and_clear();
    let evaluations = evaluations?;

    ctx.print_list(&evaluations, "No evaluations found.", || {
        let table = TableFormatter::simple(
            vec!["ID", "Status", "Testset", "Variants", "Created", "Duration"],
            evaluation_rows(&evaluations),
        )?;
        Ok(format!(
            "{}\n{} evaluations found",
            table,
            colors::dim(&evaluations.len().to_string())
        ))
    })
}

/// Show one evaluation
pub async fn show(ctx: &CommandContext, id: String) -> Result<()> {
    let sp = spinner("Fetching evaluation...");
    let evaluation = ctx.client.evaluations().fetch(&id).await;
    sp.finish_and_clear();
    let evaluation = evaluation?;

    ctx.print(&evaluation, || TableFormatter::key_value(evaluation_details(&evaluation)))
}

/// Show only the status of an evaluation
pub async fn status(ctx: &CommandContext, id: String) -> Result<()> {
    let projection = ctx.client.evaluations().fetch_status(&id).await?;

    ctx.print(&projection, || {
        Ok(format!("{} {}", id, colors::status(projection.status)))
    })
}

/// Start an evaluation
pub async fn create(
    ctx: &CommandContext,
    testset_id: String,
    variant_ids: Vec<String>,
    evaluators_configs: Vec<String>,
) -> Result<()> {
    let app_id = ctx.require_app_id()?;
    let request = CreateEvaluationRequest {
        testset_id,
        variant_ids,
        evaluators_configs,
    };

    let sp = spinner("Starting evaluation...");
    let response = ctx.client.evaluations().create(app_id, &request).await;
    sp.finish_and_clear();

    ctx.report_mutation("Evaluation started.", &response?)
}

/// Delete evaluations
pub async fn delete(ctx: &CommandContext, ids: Vec<String>, assume_yes: bool) -> Result<()> {
    let prompt = format!("Delete {} evaluation(s): {}?", ids.len(), ids.join(", "));
    if !confirm_unless(assume_yes, &prompt)? {
        println!("{}", colors::dim("Aborted."));
        return Ok(());
    }

    let sp = spinner("Deleting evaluations...");
    let ids: Vec<EvaluationId> = ids.into_iter().map(EvaluationId::from).collect();
    let response = ctx.client.evaluations().delete(&ids).await;
    sp.finish_and_clear();

    ctx.report_mutation(&format!("Deleted {} evaluation(s).", ids.len()), &response?)
}

/// List the scenarios of an evaluation
pub async fn scenarios(ctx: &CommandContext, id: String) -> Result<()> {
    let app_id = ctx.require_app_id()?;

    let sp = spinner("Fetching evaluation scenarios...");
    let scenarios = ctx.client.evaluations().fetch_all_scenarios(app_id, &id).await;
    sp.finish_and_clear();
    let scenarios = scenarios?;

    ctx.print_list(&scenarios, "No scenarios found.", || {
        TableFormatter::simple(
            vec!["ID", "Inputs", "Outputs", "Expected", "Results"],
            scenario_rows(&scenarios),
        )
    })
}

pub(crate) fn evaluation_rows(evaluations: &[Evaluation]) -> Vec<Vec<String>> {
    evaluations
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                colors::status(e.status).to_string(),
                e.testset.name.clone(),
                variant_names(e),
                format_timestamp(&e.created_at),
                format_duration_ms(e.duration_ms),
            ]
        })
        .collect()
}

pub(crate) fn evaluation_details(evaluation: &Evaluation) -> Vec<(&'static str, String)> {
    let configs = evaluation
        .evaluator_configs()
        .iter()
        .map(|c| c.id().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        ("ID", evaluation.id.to_string()),
        ("App", evaluation.app_id.to_string()),
        ("Status", colors::status(evaluation.status).to_string()),
        (
            "Testset",
            format!("{} ({})", evaluation.testset.name, evaluation.testset.id),
        ),
        ("User", evaluation.user.username.clone()),
        ("Variants", variant_names(evaluation)),
        ("Evaluators", configs),
        ("Created", format_timestamp(&evaluation.created_at)),
        ("Updated", format_timestamp(&evaluation.updated_at)),
        ("Duration", format_duration_ms(evaluation.duration_ms)),
    ]
}

pub(crate) fn scenario_rows(scenarios: &[EvaluationScenario]) -> Vec<Vec<String>> {
    scenarios
        .iter()
        .map(|s| {
            let record = &s.record;
            vec![
                s.id().to_string(),
                record
                    .inputs
                    .iter()
                    .map(|i| format!("{}={}", i.name, display_value(&i.value)))
                    .collect::<Vec<_>>()
                    .join("\n"),
                record
                    .outputs
                    .iter()
                    .map(typed_value)
                    .collect::<Vec<_>>()
                    .join("\n"),
                record
                    .correct_answer
                    .as_ref()
                    .map(typed_value)
                    .unwrap_or_else(|| "-".to_string()),
                record
                    .results
                    .iter()
                    .map(|r| format!("{}: {}", r.evaluator_config, typed_value(&r.result)))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ]
        })
        .collect()
}

fn variant_names(evaluation: &Evaluation) -> String {
    evaluation
        .variants
        .iter()
        .map(|v| v.variant_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn typed_value(value: &TypedValue) -> String {
    display_value(&value.value)
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use variant_eval_domain::{scenario::decorate_scenarios, RawEvaluation, RawEvaluationScenario};
    use variant_eval_testing::{EvaluationRecordBuilder, ScenarioRecordBuilder};

    fn evaluation() -> Evaluation {
        let raw: RawEvaluation = serde_json::from_value(
            EvaluationRecordBuilder::new("e1")
                .with_variants(&[("v1", "app.a"), ("v2", "app.b")])
                .with_aggregated_configs(&["c1", "c2"])
                .build(),
        )
        .unwrap();
        Evaluation::from_raw(raw).unwrap()
    }

    #[test]
    fn test_evaluation_rows() {
        colored::control::set_override(false);
        let rows = evaluation_rows(&[evaluation()]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "e1");
        assert_eq!(rows[0][1], "Completed");
        assert_eq!(rows[0][2], "capitals");
        assert_eq!(rows[0][3], "app.a, app.b");
        assert_eq!(rows[0][5], "30.0s");
    }

    #[test]
    fn test_evaluation_details_lists_configs() {
        let details = evaluation_details(&evaluation());
        let evaluators = details
            .iter()
            .find(|(key, _)| *key == "Evaluators")
            .map(|(_, value)| value.clone());

        assert_eq!(evaluators.as_deref(), Some("c1, c2"));
    }

    #[test]
    fn test_scenario_rows() {
        let record: RawEvaluationScenario = serde_json::from_value(
            ScenarioRecordBuilder::evaluation("s1", "e1")
                .with_input("capital_of", "France")
                .build(),
        )
        .unwrap();
        let scenarios = decorate_scenarios(vec![record], &evaluation());
        let rows = scenario_rows(&scenarios);

        assert_eq!(rows[0][0], "s1");
        assert_eq!(rows[0][1], "country=France\ncapital_of=France");
        assert_eq!(rows[0][2], "Paris");
        assert_eq!(rows[0][3], "-");
    }
}
