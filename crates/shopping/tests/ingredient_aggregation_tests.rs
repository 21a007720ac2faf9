use std::num::NonZeroU32;

use cookbook_shared::{Ingredient, MenuEntry, Recipe};
use cookbook_shopping::{IngredientAggregationService, ShoppingList};
use time::macros::datetime;

fn recipe(title: &str, ingredients: &[(&str, &str, &str)]) -> Recipe {
    Recipe {
        key: title.to_lowercase().replace(' ', "-"),
        title: title.to_owned(),
        category: "Dinner".to_owned(),
        description: String::new(),
        prep_time: 15,
        cook_time: 30,
        servings: 4,
        ingredients: ingredients
            .iter()
            .enumerate()
            .map(|(i, (name, quantity, unit))| Ingredient {
                key: format!("{title}-{i}"),
                name: name.to_string(),
                quantity: quantity.to_string(),
                unit: unit.to_string(),
            })
            .collect(),
        instructions: vec!["Cook it".to_owned()],
        tags: vec![],
        created_at: datetime!(2024-05-01 12:00 UTC),
    }
}

fn entry(recipe: Recipe, count: u32) -> MenuEntry {
    MenuEntry::new(recipe, NonZeroU32::new(count).unwrap())
}

fn generate(entries: &[MenuEntry]) -> ShoppingList {
    ShoppingList::generate(entries, &IngredientAggregationService::default())
}

#[test]
fn test_numeric_quantities_are_summed_with_counts() {
    let entries = vec![
        entry(recipe("Bread", &[("Flour", "1", "cup")]), 2),
        entry(recipe("Cake", &[("Flour", "1", "cup")]), 3),
    ];

    let list = generate(&entries);

    assert_eq!(list.len(), 1);
    let flour = list.get("flour-cup").expect("flour should be aggregated");
    assert_eq!(flour.quantity, "5");
    assert!(!flour.checked);
}

#[test]
fn test_fractional_decimals_are_summed() {
    let entries = vec![
        entry(recipe("Bread", &[("Butter", "0.5", "cup")]), 1),
        entry(recipe("Cake", &[("Butter", "0.25", "cup")]), 1),
    ];

    let list = generate(&entries);

    assert_eq!(list.get("butter-cup").unwrap().quantity, "0.75");
}

#[test]
fn test_non_numeric_quantity_falls_back_to_concatenation() {
    let entries = vec![
        entry(recipe("Soup", &[("Salt", "a pinch", "")]), 1),
        entry(recipe("Stew", &[("Salt", "2", "")]), 1),
    ];

    let list = generate(&entries);

    let salt = list.get("salt-").unwrap();
    assert_eq!(salt.quantity, "a pinch + 2");
    assert!(salt.quantity.contains("a pinch"));
    assert!(salt.quantity.contains(" + "));
}

#[test]
fn test_numeric_then_text_quantity_concatenates() {
    let entries = vec![
        entry(recipe("Soup", &[("Pepper", "1", "tsp")]), 2),
        entry(recipe("Stew", &[("Pepper", "to taste", "TSP")]), 1),
        entry(recipe("Curry", &[("pepper", "3", "tsp")]), 1),
    ];

    let list = generate(&entries);

    assert_eq!(list.get("pepper-tsp").unwrap().quantity, "2 + to taste + 3");
}

#[test]
fn test_name_and_unit_are_case_insensitive() {
    let entries = vec![
        entry(recipe("Soup", &[("Salt", "1", "tsp")]), 1),
        entry(recipe("Stew", &[("salt", "1", "TSP")]), 1),
    ];

    let list = generate(&entries);

    assert_eq!(list.len(), 1);
    assert_eq!(list.get("salt-tsp").unwrap().quantity, "2");
}

#[test]
fn test_different_units_stay_separate() {
    let entries = vec![entry(
        recipe("Soup", &[("Onion", "1", "whole"), ("Onion", "1", "cup")]),
        1,
    )];

    let list = generate(&entries);

    assert_eq!(list.len(), 2);
    assert!(list.get("onion-whole").is_some());
    assert!(list.get("onion-cup").is_some());
}

#[test]
fn test_groups_by_upper_cased_first_letter() {
    let entries = vec![entry(
        recipe(
            "Salad",
            &[
                ("tomato", "2", "whole"),
                ("apple", "1", "whole"),
                ("Avocado", "1", "whole"),
                ("basil", "5", "leaf"),
            ],
        ),
        1,
    )];

    let list = generate(&entries);
    let groups = list.groups();

    let letters: Vec<_> = groups.iter().map(|g| g.letter.as_str()).collect();
    assert_eq!(letters, vec!["A", "B", "T"]);

    let a_names: Vec<_> = groups[0].items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(a_names, vec!["apple", "Avocado"]);
}

#[test]
fn test_recipe_titles_listed_once_in_first_seen_order() {
    let entries = vec![
        entry(recipe("Pancakes", &[("Egg", "2", ""), ("Egg", "1", "")]), 1),
        entry(recipe("Omelette", &[("egg", "3", "")]), 2),
        entry(recipe("Pancakes", &[("Egg", "1", "")]), 1),
    ];

    let list = generate(&entries);
    let egg = list.get("egg-").unwrap();

    assert_eq!(egg.recipes, vec!["Pancakes", "Omelette"]);
    assert_eq!(egg.quantity, "10");
}

#[test]
fn test_empty_menu_yields_empty_list() {
    let list = generate(&[]);

    assert!(list.is_empty());
    assert_eq!(list.items().count(), 0);
    assert!(list.groups().is_empty());
}

#[test]
fn test_aggregation_is_deterministic_and_repeatable() {
    let entries = vec![
        entry(
            recipe(
                "Chili",
                &[("Beans", "2", "can"), ("Cumin", "1", "tsp"), ("Salt", "to taste", "")],
            ),
            2,
        ),
        entry(
            recipe("Tacos", &[("beans", "1", "CAN"), ("Tortilla", "8", ""), ("Salt", "1", "")]),
            1,
        ),
    ];

    let first = generate(&entries);
    let second = generate(&entries);

    assert_eq!(first, second);

    let keys: Vec<_> = first.items().map(|i| i.key.as_str()).collect();
    assert_eq!(keys, vec!["beans-can", "cumin-tsp", "salt-", "tortilla-"]);
    assert_eq!(first.get("beans-can").unwrap().quantity, "5");
    assert_eq!(first.get("salt-").unwrap().quantity, "to taste + 1");
}

#[test]
fn test_groups_serialize_for_display() {
    let entries = vec![entry(recipe("Salad", &[("apple", "1", "whole")]), 1)];

    let list = generate(&entries);
    let json = serde_json::to_value(list.groups()).unwrap();

    assert_eq!(json[0]["letter"], "A");
    assert_eq!(json[0]["items"][0]["quantity"], "1");
    assert_eq!(json[0]["items"][0]["recipes"][0], "Salad");
}
