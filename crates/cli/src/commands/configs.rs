//! Evaluator config commands

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::commands::CommandContext;
use crate::interactive::{confirm_unless, spinner};
use crate::output::{colors, format_timestamp, TableFormatter};
use variant_eval_domain::EvaluatorConfig;
use variant_eval_sdk::{CreateEvaluatorConfigRequest, UpdateEvaluatorConfigRequest};

/// List the evaluator configs of the selected app
pub async fn list(ctx: &CommandContext) -> Result<()> {
    let app_id = ctx.require_app_id()?;

    let sp = spinner("Fetching evaluator configs...");
    let configs = ctx.client.evaluators().fetch_all_configs(app_id).await;
    sp.finish_and_clear();
    let configs = configs?;

    ctx.print_list(&configs, "No evaluator configs found.", || {
        TableFormatter::simple(vec!["ID", "Name", "Evaluator", "Created"], config_rows(&configs))
    })
}

/// Create an evaluator config
pub async fn create(
    ctx: &CommandContext,
    name: String,
    evaluator_key: String,
    settings: Option<String>,
) -> Result<()> {
    let app_id = ctx.require_app_id()?;

    let mut request = CreateEvaluatorConfigRequest::new(name).with_evaluator_key(evaluator_key);
    if let Some(settings) = settings {
        request = request.with_settings_values(parse_settings(&settings)?);
    }

    let sp = spinner("Creating evaluator config...");
    let response = ctx.client.evaluators().create_config(app_id, &request).await;
    sp.finish_and_clear();
    let response = response?;

    ctx.report_mutation("Evaluator config created.", &response)
}

/// Update an evaluator config
pub async fn update(
    ctx: &CommandContext,
    id: String,
    name: Option<String>,
    evaluator_key: Option<String>,
    settings: Option<String>,
) -> Result<()> {
    let update = UpdateEvaluatorConfigRequest {
        name,
        evaluator_key,
        settings_values: settings.as_deref().map(parse_settings).transpose()?,
    };

    if update.is_empty() {
        anyhow::bail!("Nothing to update. Pass --name, --evaluator-key or --settings.");
    }

    let sp = spinner("Updating evaluator config...");
    let response = ctx.client.evaluators().update_config(&id, &update).await;
    sp.finish_and_clear();
    let response = response?;

    ctx.report_mutation(&format!("Evaluator config {} updated.", id), &response)
}

/// Delete an evaluator config
pub async fn delete(ctx: &CommandContext, id: String, assume_yes: bool) -> Result<()> {
    if !confirm_unless(assume_yes, &format!("Delete evaluator config {}?", id))? {
        println!("{}", colors::dim("Aborted."));
        return Ok(());
    }

    let sp = spinner("Deleting evaluator config...");
    let response = ctx.client.evaluators().delete_config(&id).await;
    sp.finish_and_clear();
    let response = response?;

    ctx.report_mutation(&format!("Evaluator config {} deleted.", id), &response)
}

pub(crate) fn config_rows(configs: &[EvaluatorConfig]) -> Vec<Vec<String>> {
    configs
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.name.clone(),
                c.evaluator_key.clone(),
                c.created_at
                    .as_ref()
                    .map(format_timestamp)
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect()
}

/// Parse `--settings` as a JSON object
pub(crate) fn parse_settings(raw: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw).context("--settings must be valid JSON")? {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("--settings must be a JSON object, got {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use variant_eval_testing::create_test_evaluator_config;

    #[test]
    fn test_parse_settings() {
        let map = parse_settings(r#"{"threshold": 0.5}"#).unwrap();
        assert_eq!(map.get("threshold"), Some(&serde_json::json!(0.5)));

        assert!(parse_settings("[1, 2]").is_err());
        assert!(parse_settings("not json").is_err());
    }

    #[test]
    fn test_config_rows() {
        let config: EvaluatorConfig =
            serde_json::from_value(create_test_evaluator_config("c1", "auto_regex_test")).unwrap();
        let rows = config_rows(&[config]);

        assert_eq!(rows[0][0], "c1");
        assert_eq!(rows[0][2], "auto_regex_test");
        assert_eq!(rows[0][3], "2024-01-09 08:30:00");
    }
}
