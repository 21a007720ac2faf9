use cookbook_recipe::{Catalog, RateInput, RecipeFilter};
use cookbook_shared::{Error, NewIngredient, NewRecipe};
use time::macros::datetime;

fn pancakes() -> NewRecipe {
    NewRecipe {
        title: "  Pancakes ".to_owned(),
        category: "Breakfast".to_owned(),
        description: "Fluffy morning pancakes".to_owned(),
        prep_time: 10,
        cook_time: 15,
        servings: 4,
        ingredients: vec![
            NewIngredient::new("Flour", "1", "cup"),
            NewIngredient::new("", "2", "cup"),
            NewIngredient::new("Sugar", "  ", "tbsp"),
            NewIngredient::new("Salt", "a pinch", ""),
        ],
        instructions: vec!["Mix".to_owned(), "   ".to_owned(), "Fry".to_owned()],
        tags: vec![
            "sweet".to_owned(),
            " sweet ".to_owned(),
            "".to_owned(),
            "quick".to_owned(),
        ],
    }
}

fn named(title: &str, category: &str, prep_time: u32, tags: &[&str]) -> NewRecipe {
    NewRecipe {
        title: title.to_owned(),
        category: category.to_owned(),
        prep_time,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn test_create_cleans_up_form_input() {
    let mut catalog = Catalog::default();

    let recipe = catalog.create(pancakes()).unwrap().clone();

    assert_eq!(recipe.title, "Pancakes");
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.ingredients[0].name, "Flour");
    assert_eq!(recipe.ingredients[1].quantity, "a pinch");
    assert_ne!(recipe.ingredients[0].key, recipe.ingredients[1].key);
    assert_eq!(recipe.instructions, vec!["Mix", "Fry"]);
    assert_eq!(recipe.tags, vec!["sweet", "quick"]);
    assert!(!recipe.key.is_empty());
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_create_defaults_category() {
    let mut catalog = Catalog::default();

    let recipe = catalog.create(named("Toast", " ", 5, &[])).unwrap();

    assert_eq!(recipe.category, "Uncategorized");
    assert_eq!(recipe.servings, 4);
}

#[test]
fn test_create_rejects_blank_title() {
    let mut catalog = Catalog::default();

    let err = catalog.create(named("   ", "Dinner", 5, &[])).unwrap_err();

    assert!(matches!(err, Error::Validate(_)));
    assert!(catalog.is_empty());
}

#[test]
fn test_insert_rejects_duplicate_key() {
    let mut catalog = Catalog::default();
    let recipe = catalog.create(pancakes()).unwrap().clone();

    let err = catalog.insert(recipe).unwrap_err();

    let Error::Validate(errors) = err else {
        panic!("expected a validation error, got {err:?}");
    };
    assert!(errors.field_errors().contains_key("key"));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_filter_by_query_category_and_time_newest_first() {
    let mut catalog = Catalog::default();
    let old = catalog
        .create_at(named("Chili", "Dinner", 20, &["spicy"]), datetime!(2024-01-01 0:00 UTC))
        .unwrap()
        .key
        .clone();
    let new = catalog
        .create_at(named("Curry", "Dinner", 30, &["Spicy"]), datetime!(2024-02-01 0:00 UTC))
        .unwrap()
        .key
        .clone();
    catalog
        .create_at(named("Crepes", "Dessert", 90, &[]), datetime!(2024-03-01 0:00 UTC))
        .unwrap();

    let all = catalog.filter(&RecipeFilter::default());
    let titles: Vec<_> = all.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Crepes", "Curry", "Chili"]);

    let spicy = catalog.filter(&RecipeFilter {
        query: Some("SPICY".to_owned()),
        ..Default::default()
    });
    let keys: Vec<_> = spicy.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec![new.as_str(), old.as_str()]);

    let quick_dinners = catalog.filter(&RecipeFilter {
        query: None,
        categories: vec!["Dinner".to_owned()],
        max_total_time: Some(25),
    });
    assert_eq!(quick_dinners.len(), 1);
    assert_eq!(quick_dinners[0].title, "Chili");

    let desserts = catalog.filter(&RecipeFilter {
        categories: vec!["Dessert".to_owned()],
        ..Default::default()
    });
    assert_eq!(desserts.len(), 1);
}

#[test]
fn test_filter_query_matches_description() {
    let mut catalog = Catalog::default();
    catalog.create(pancakes()).unwrap();

    let found = catalog.filter(&RecipeFilter {
        query: Some("morning".to_owned()),
        ..Default::default()
    });

    assert_eq!(found.len(), 1);
}

#[test]
fn test_categories_in_first_seen_order() {
    let mut catalog = Catalog::default();
    catalog.create(named("Chili", "Dinner", 20, &[])).unwrap();
    catalog.create(named("Crepes", "Dessert", 20, &[])).unwrap();
    catalog.create(named("Curry", "Dinner", 20, &[])).unwrap();

    assert_eq!(catalog.categories(), vec!["Dinner", "Dessert"]);
}

#[test]
fn test_toggle_favorite() {
    let mut catalog = Catalog::default();
    let key = catalog.create(pancakes()).unwrap().key.clone();

    assert!(catalog.toggle_favorite(&key).unwrap());
    assert!(catalog.is_favorite(&key));
    assert_eq!(catalog.favorites().len(), 1);

    assert!(!catalog.toggle_favorite(&key).unwrap());
    assert!(catalog.favorites().is_empty());

    assert!(matches!(
        catalog.toggle_favorite("missing"),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_rate_accepts_one_to_five_stars() {
    let mut catalog = Catalog::default();
    let key = catalog.create(pancakes()).unwrap().key.clone();

    catalog
        .rate(RateInput {
            key: key.clone(),
            stars: 4,
        })
        .unwrap();
    assert_eq!(catalog.rating(&key), Some(4));

    for stars in [0, 6] {
        let err = catalog
            .rate(RateInput {
                key: key.clone(),
                stars,
            })
            .unwrap_err();
        assert!(matches!(err, Error::Validate(_)));
    }
    assert_eq!(catalog.rating(&key), Some(4));
}

#[test]
fn test_remove_drops_favorite_and_rating() {
    let mut catalog = Catalog::default();
    let key = catalog.create(pancakes()).unwrap().key.clone();
    catalog.toggle_favorite(&key).unwrap();
    catalog
        .rate(RateInput {
            key: key.clone(),
            stars: 5,
        })
        .unwrap();

    let removed = catalog.remove(&key).unwrap();

    assert_eq!(removed.title, "Pancakes");
    assert!(catalog.is_empty());
    assert!(catalog.favorite_keys().is_empty());
    assert_eq!(catalog.rating(&key), None);
    assert!(matches!(catalog.remove(&key), Err(Error::NotFound(_))));
}
