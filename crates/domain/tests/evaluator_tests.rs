//! Tests for evaluator catalog decoration
//!
//! Human evaluators are filtered out, icons come from a fixed table and tag
//! colors are a stable hash of the key into the palette.

use proptest::prelude::*;
use variant_eval_domain::evaluator::{
    decorate_catalog, string_to_number_in_range, tag_color, Evaluator, EVALUATOR_ICONS,
    TAG_COLORS,
};

fn entry(key: &str) -> Evaluator {
    serde_json::from_value(serde_json::json!({
        "name": key,
        "key": key,
        "settings_template": {}
    }))
    .unwrap()
}

#[test]
fn test_every_builtin_gets_its_icon() {
    let catalog = decorate_catalog(EVALUATOR_ICONS.iter().map(|(key, _)| entry(key)).collect());
    assert_eq!(catalog.len(), EVALUATOR_ICONS.len());

    for (evaluator, (_, icon)) in catalog.iter().zip(EVALUATOR_ICONS) {
        assert_eq!(evaluator.icon_url.as_deref(), Some(*icon));
    }
}

#[test]
fn test_color_matches_hash_into_palette() {
    let key = "auto_exact_match";
    let index: usize = key.encode_utf16().map(usize::from).sum::<usize>() % TAG_COLORS.len();
    assert_eq!(tag_color(key), TAG_COLORS[index]);
}

#[test]
fn test_decorated_entry_serialization_omits_missing_icon() {
    let catalog = decorate_catalog(vec![entry("custom")]);
    let value = serde_json::to_value(&catalog[0]).unwrap();
    assert!(value.get("icon_url").is_none());
    assert!(value["color"].is_string());
}

proptest! {
    #[test]
    fn prop_color_index_in_palette_range(key in "\\PC{0,40}") {
        let index = string_to_number_in_range(&key, 0, TAG_COLORS.len() - 1);
        prop_assert!(index < TAG_COLORS.len());
    }

    #[test]
    fn prop_color_is_stable_per_key(key in "[a-z_]{1,30}") {
        let first = decorate_catalog(vec![entry(&key), entry("auto_regex_test")]);
        let second = decorate_catalog(vec![entry("auto_webhook_test"), entry(&key)]);

        let color_of = |catalog: &[Evaluator]| {
            catalog.iter().find(|e| e.key == key).and_then(|e| e.color.clone())
        };
        prop_assert_eq!(color_of(&first), color_of(&second));
    }

    #[test]
    fn prop_human_keys_never_survive(suffix in "[a-z_]{0,20}") {
        let key = format!("human{suffix}");
        let catalog = decorate_catalog(vec![entry(&key), entry("auto_exact_match")]);
        prop_assert!(catalog.iter().all(|e| !e.key.starts_with("human")));
        prop_assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn prop_range_mapping_respects_bounds(key in "\\PC{0,20}", min in 0usize..50, span in 0usize..50) {
        let max = min + span;
        let value = string_to_number_in_range(&key, min, max);
        prop_assert!(value >= min && value <= max);
    }
}
