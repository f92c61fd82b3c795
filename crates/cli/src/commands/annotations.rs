//! Annotation commands

use anyhow::{Context, Result};

use crate::commands::evaluations::{evaluation_details, evaluation_rows, typed_value};
use crate::commands::CommandContext;
use crate::interactive::{confirm_unless, spinner};
use crate::output::{colors, TableFormatter};
use variant_eval_domain::{Annotation, AnnotationId, AnnotationScenario, TypedValue};
use variant_eval_sdk::{AnnotationScenarioUpdate, CreateAnnotationRequest};

/// List the annotations of the selected app
pub async fn list(ctx: &CommandContext) -> Result<()> {
    let app_id = ctx.require_app_id()?;

    let sp = spinner("Fetching annotations...");
    let annotations = ctx.client.annotations().fetch_all(app_id).await;
    sp.finish_and_clear();
    let annotations = annotations?;

    ctx.print_list(&annotations, "No annotations found.", || {
        TableFormatter::simple(
            vec!["ID", "Kind", "Status", "Testset", "Variants", "Created", "Duration"],
            annotation_rows(&annotations),
        )
    })
}

/// Show one annotation
pub async fn show(ctx: &CommandContext, id: String) -> Result<()> {
    let sp = spinner("Fetching annotation...");
    let annotation = ctx.client.annotations().fetch(&id).await;
    sp.finish_and_clear();
    let annotation = annotation?;

    ctx.print(&annotation, || {
        let mut details = evaluation_details(&annotation.run);
        details.insert(1, ("Kind", annotation_kind(&annotation)));
        TableFormatter::key_value(details)
    })
}

/// Show only the status of an annotation
pub async fn status(ctx: &CommandContext, id: String) -> Result<()> {
    let projection = ctx.client.annotations().fetch_status(&id).await?;

    ctx.print(&projection, || {
        Ok(format!("{} {}", id, colors::status(projection.status)))
    })
}

/// Start an annotation
pub async fn create(
    ctx: &CommandContext,
    annotation_name: String,
    testset_id: String,
    variant_ids: Vec<String>,
) -> Result<()> {
    let app_id = ctx.require_app_id()?;
    let request = CreateAnnotationRequest {
        annotation_name,
        testset_id,
        variant_ids,
    };

    let sp = spinner("Starting annotation...");
    let response = ctx.client.annotations().create(app_id, &request).await;
    sp.finish_and_clear();

    ctx.report_mutation("Annotation started.", &response?)
}

/// Delete annotations
pub async fn delete(ctx: &CommandContext, ids: Vec<String>, assume_yes: bool) -> Result<()> {
    let prompt = format!("Delete {} annotation(s): {}?", ids.len(), ids.join(", "));
    if !confirm_unless(assume_yes, &prompt)? {
        println!("{}", colors::dim("Aborted."));
        return Ok(());
    }

    let sp = spinner("Deleting annotations...");
    let ids: Vec<AnnotationId> = ids.into_iter().map(AnnotationId::from).collect();
    let response = ctx.client.annotations().delete(&ids).await;
    sp.finish_and_clear();

    ctx.report_mutation(&format!("Deleted {} annotation(s).", ids.len()), &response?)
}

/// List the scenarios of an annotation
pub async fn scenarios(ctx: &CommandContext, id: String) -> Result<()> {
    let app_id = ctx.require_app_id()?;

    let sp = spinner("Fetching annotation scenarios...");
    let scenarios = ctx.client.annotations().fetch_all_scenarios(app_id, &id).await;
    sp.finish_and_clear();
    let scenarios = scenarios?;

    ctx.print_list(&scenarios, "No scenarios found.", || {
        TableFormatter::simple(
            vec!["ID", "Outputs", "Pinned", "Note", "Result"],
            annotation_scenario_rows(&scenarios),
        )
    })
}

/// Update one annotation scenario
pub async fn update_scenario(
    ctx: &CommandContext,
    annotation_id: String,
    scenario_id: String,
    pinned: Option<bool>,
    note: Option<String>,
    result: Option<String>,
) -> Result<()> {
    let update = build_update(pinned, note, result.as_deref())?;

    let sp = spinner("Updating annotation scenario...");
    let response = ctx
        .client
        .annotations()
        .update_scenario(&annotation_id, &scenario_id, &update)
        .await;
    sp.finish_and_clear();

    ctx.report_mutation(&format!("Scenario {} updated.", scenario_id), &response?)
}

pub(crate) fn build_update(
    pinned: Option<bool>,
    note: Option<String>,
    result: Option<&str>,
) -> Result<AnnotationScenarioUpdate> {
    let mut update = AnnotationScenarioUpdate::new();
    if let Some(pinned) = pinned {
        update = update.pinned(pinned);
    }
    if let Some(note) = note {
        update = update.note(note);
    }
    if let Some(result) = result {
        let result: TypedValue = serde_json::from_str(result)
            .context("--result must be a JSON object like {\"type\": \"text\", \"value\": \"...\"}")?;
        update = update.result(result);
    }

    if update == AnnotationScenarioUpdate::default() {
        anyhow::bail!("Nothing to update. Pass --pinned, --note or --result.");
    }
    Ok(update)
}

fn annotation_kind(annotation: &Annotation) -> String {
    annotation
        .annotation_name
        .clone()
        .unwrap_or_else(|| "-".to_string())
}

pub(crate) fn annotation_rows(annotations: &[Annotation]) -> Vec<Vec<String>> {
    let runs: Vec<_> = annotations.iter().map(|a| a.run.clone()).collect();
    evaluation_rows(&runs)
        .into_iter()
        .zip(annotations)
        .map(|(mut row, annotation)| {
            row.insert(1, annotation_kind(annotation));
            row
        })
        .collect()
}

pub(crate) fn annotation_scenario_rows(scenarios: &[AnnotationScenario]) -> Vec<Vec<String>> {
    scenarios
        .iter()
        .map(|s| {
            let record = &s.record;
            vec![
                record.id.to_string(),
                record
                    .outputs
                    .iter()
                    .map(typed_value)
                    .collect::<Vec<_>>()
                    .join("\n"),
                if record.is_pinned.unwrap_or(false) {
                    "yes".to_string()
                } else {
                    "no".to_string()
                },
                record.note.clone().unwrap_or_default(),
                record
                    .result
                    .as_ref()
                    .map(typed_value)
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use variant_eval_domain::{
        annotation::decorate_annotation_scenarios, RawAnnotation, RawAnnotationScenario,
    };
    use variant_eval_testing::{create_test_annotation, ScenarioRecordBuilder};

    fn annotation() -> Annotation {
        let raw: RawAnnotation =
            serde_json::from_value(create_test_annotation("a1", "app-1")).unwrap();
        Annotation::from_raw(raw).unwrap()
    }

    #[test]
    fn test_annotation_rows_include_kind() {
        let rows = annotation_rows(&[annotation()]);

        assert_eq!(rows[0][0], "a1");
        assert_eq!(rows[0][1], "comparison");
        assert_eq!(rows[0][4], "app.v1, app.v2");
    }

    #[test]
    fn test_annotation_scenario_rows() {
        let record: RawAnnotationScenario = serde_json::from_value(
            ScenarioRecordBuilder::annotation("s1", "a1")
                .pinned()
                .with_note("check tone")
                .build(),
        )
        .unwrap();
        let scenarios = decorate_annotation_scenarios(vec![record], &annotation());
        let rows = annotation_scenario_rows(&scenarios);

        assert_eq!(rows[0], vec!["s1", "Paris", "yes", "check tone", "-"]);
    }

    #[test]
    fn test_build_update() {
        let update = build_update(
            Some(true),
            None,
            Some(r#"{"type": "text", "value": "variant-1"}"#),
        )
        .unwrap();

        assert_eq!(update.is_pinned, Some(true));
        assert_eq!(update.note, None);
        assert_eq!(update.result.unwrap().value, serde_json::json!("variant-1"));
    }

    #[test]
    fn test_build_update_requires_a_change() {
        assert!(build_update(None, None, None).is_err());
        assert!(build_update(None, None, Some("not json")).is_err());
    }
}
