//! Evaluator catalog commands

use anyhow::Result;

use crate::commands::CommandContext;
use crate::interactive::spinner;
use crate::output::TableFormatter;
use variant_eval_domain::Evaluator;

/// List the evaluator catalog
pub async fn list(ctx: &CommandContext) -> Result<()> {
    let sp = spinner("Fetching evaluators...");
    let catalog = ctx.client.evaluators().fetch_all().await;
    sp.finish_and_clear();
    let catalog = catalog?;

    ctx.print_list(&catalog, "No evaluators available.", || {
        TableFormatter::simple(vec!["Key", "Name", "Tag", "Icon", "Direct"], catalog_rows(&catalog))
    })
}

pub(crate) fn catalog_rows(catalog: &[Evaluator]) -> Vec<Vec<String>> {
    catalog
        .iter()
        .map(|e| {
            vec![
                e.key.clone(),
                e.name.clone(),
                e.color.clone().unwrap_or_default(),
                e.icon_url.clone().unwrap_or_else(|| "-".to_string()),
                e.direct_use.map(|d| if d { "yes" } else { "no" }).unwrap_or("-").to_string(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use variant_eval_domain::evaluator::decorate_catalog;
    use variant_eval_testing::create_test_catalog;

    #[test]
    fn test_catalog_rows() {
        let entries: Vec<Evaluator> = serde_json::from_value(create_test_catalog()).unwrap();
        let rows = catalog_rows(&decorate_catalog(entries));

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "auto_exact_match");
        assert_eq!(rows[0][3], "/assets/evaluators/target.png");
        assert_eq!(rows[2][3], "-");
        assert_eq!(rows[2][4], "no");
    }
}
