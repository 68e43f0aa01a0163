//! Property-based tests for result grouping.
//!
//! Tests validate:
//! 1. Every hit lands in exactly one group, under the label its id maps to
//! 2. Groups are in ascending label order
//! 3. Within a group names are in case-insensitive order, ties in input order
//! 4. Grouping never touches the input
//! 5. Regrouping the flattened output reproduces it

use codexv::model::{group_items, group_label_for, ResultItem, SearchResults, TypeTag};
use proptest::prelude::*;
use serde_json::json;

fn id_strategy() -> impl Strategy<Value = String> {
    let prefixes: Vec<&'static str> = TypeTag::all()
        .map(|tag| tag.prefix())
        .chain(["weapon", "", "Item"])
        .collect();
    (proptest::sample::select(prefixes), "[a-z0-9_]{0,6}")
        .prop_map(|(prefix, rest)| format!("{prefix}{rest}"))
}

fn item_strategy() -> impl Strategy<Value = ResultItem> {
    (id_strategy(), "[a-cA-C ]{0,3}").prop_map(|(id, name)| ResultItem::new(id, name))
}

proptest! {
    #[test]
    fn every_hit_grouped_once(items in prop::collection::vec(item_strategy(), 0..40)) {
        let groups = group_items(&items);

        let total: usize = groups.iter().map(|group| group.items.len()).sum();
        prop_assert_eq!(total, items.len());

        for group in &groups {
            prop_assert!(!group.items.is_empty());
            for item in &group.items {
                prop_assert_eq!(group_label_for(&item.id), group.label);
            }
        }
    }

    #[test]
    fn labels_ascend(items in prop::collection::vec(item_strategy(), 0..40)) {
        let groups = group_items(&items);
        for pair in groups.windows(2) {
            prop_assert!(pair[0].label < pair[1].label);
        }
    }

    #[test]
    fn names_sorted_stably(items in prop::collection::vec(item_strategy(), 0..40)) {
        let groups = group_items(&items);

        for group in &groups {
            for pair in group.items.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let (ka, kb) = (a.name.to_lowercase(), b.name.to_lowercase());
                prop_assert!(ka <= kb);
                if ka == kb {
                    let pos_a = items.iter().position(|item| std::ptr::eq(item, a)).unwrap();
                    let pos_b = items.iter().position(|item| std::ptr::eq(item, b)).unwrap();
                    prop_assert!(pos_a < pos_b);
                }
            }
        }
    }

    #[test]
    fn regrouping_is_idempotent(items in prop::collection::vec(item_strategy(), 0..40)) {
        let layout = |items: &[ResultItem]| -> Vec<(&'static str, Vec<String>)> {
            group_items(items)
                .into_iter()
                .map(|group| {
                    (group.label, group.items.iter().map(|item| item.id.clone()).collect())
                })
                .collect()
        };

        let flattened: Vec<ResultItem> = group_items(&items)
            .into_iter()
            .flat_map(|group| group.items.into_iter().cloned())
            .collect();

        prop_assert_eq!(layout(&flattened), layout(&items));
    }

    #[test]
    fn input_untouched(items in prop::collection::vec(item_strategy(), 0..20)) {
        let before = items.clone();
        let _ = group_items(&items);
        prop_assert_eq!(items, before);
    }
}

#[test]
fn fixture_groups_match_expected_layout() {
    let text = include_str!("fixtures/search_results.json");
    let results: SearchResults = serde_json::from_str(text).unwrap();
    let groups = codexv::model::group_results(&results);

    let layout: Vec<(&str, Vec<&str>)> = groups
        .iter()
        .map(|group| {
            (
                group.label,
                group.items.iter().map(|item| item.id.as_str()).collect(),
            )
        })
        .collect();

    assert_eq!(
        layout,
        vec![
            ("Class", vec!["infantry_class_heavy", "mec_class_valkyrie"]),
            ("Foundry Project", vec!["foundry_plasma_cooling"]),
            (
                "Item",
                vec!["item_heavy_plasma", "item_plasma_pistol", "item_plasma_rifle"]
            ),
            ("Other", vec!["weapon_plasma_pistol"]),
            ("Research", vec!["research_plasma_weapons"]),
        ]
    );
}

#[test]
fn extra_fields_survive_parsing() {
    let results: SearchResults = serde_json::from_value(json!({
        "id": "search_results",
        "query": "x",
        "results": [{ "id": "item_a", "name": "A", "damage": 9 }]
    }))
    .unwrap();

    assert_eq!(results.results[0].fields.get("damage"), Some(&json!(9)));
}
