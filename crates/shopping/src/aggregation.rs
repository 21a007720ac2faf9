use cookbook_shared::{Ingredient, MenuEntry};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::quantity::{format_quantity, parse_exact_quantity, parse_quantity};

/// How a contribution is appended when a bucket can no longer be summed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MergePolicy {
    /// Append the raw quantity text; the menu count is not applied.
    #[default]
    Reference,
    /// Append numeric quantities multiplied by the menu count.
    Scaled,
}

/// One shopping list line: every ingredient sharing a name and unit
/// (case-insensitively) across the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedIngredient {
    pub key: String,
    pub name: String,
    pub unit: String,
    pub quantity: String,
    pub checked: bool,
    pub recipes: Vec<String>,
}

/// Build the bucket key an ingredient aggregates under.
pub fn bucket_key(name: &str, unit: &str) -> String {
    format!("{}-{}", name.to_lowercase(), unit.to_lowercase())
}

/// Ingredient Aggregation Service
///
/// Stateless domain service that merges the ingredients of every menu entry
/// into shopping list lines:
/// - "Flour 1 cup" x2 + "flour 1 CUP" x3 = "Flour 5 cup"
/// - "Salt a pinch" + "Salt 2" = "Salt a pinch + 2"
///
/// Buckets keep the spelling of the first ingredient seen and are returned in
/// creation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngredientAggregationService {
    policy: MergePolicy,
}

impl IngredientAggregationService {
    pub fn new(policy: MergePolicy) -> Self {
        Self { policy }
    }

    pub fn aggregate(&self, entries: &[MenuEntry]) -> IndexMap<String, AggregatedIngredient> {
        let mut buckets: IndexMap<String, AggregatedIngredient> = IndexMap::new();

        for entry in entries {
            let count = f64::from(entry.count.get());
            let title = &entry.recipe.title;

            for ingredient in &entry.recipe.ingredients {
                let key = bucket_key(&ingredient.name, &ingredient.unit);
                let contribution = parse_quantity(&ingredient.quantity).map(|q| q * count);

                match buckets.get_mut(&key) {
                    Some(existing) => {
                        self.merge(existing, ingredient, contribution);

                        if !existing.recipes.iter().any(|r| r == title) {
                            existing.recipes.push(title.to_owned());
                        }
                    }
                    None => {
                        let quantity = match contribution {
                            Some(value) => format_quantity(value),
                            None => ingredient.quantity.to_owned(),
                        };

                        buckets.insert(
                            key.to_owned(),
                            AggregatedIngredient {
                                key,
                                name: ingredient.name.to_owned(),
                                unit: ingredient.unit.to_owned(),
                                quantity,
                                checked: false,
                                recipes: vec![title.to_owned()],
                            },
                        );
                    }
                }
            }
        }

        tracing::debug!(
            entries = entries.len(),
            buckets = buckets.len(),
            policy = %self.policy,
            "ingredients aggregated"
        );

        buckets
    }

    fn merge(
        &self,
        existing: &mut AggregatedIngredient,
        ingredient: &Ingredient,
        contribution: Option<f64>,
    ) {
        // Once joined with " + " a line stays text, even if it starts with a number
        if let (Some(total), Some(value)) = (parse_exact_quantity(&existing.quantity), contribution)
        {
            existing.quantity = format_quantity(total + value);
            return;
        }

        let appended = match (self.policy, contribution) {
            (MergePolicy::Scaled, Some(value)) => format_quantity(value),
            _ => ingredient.quantity.to_owned(),
        };

        existing.quantity = format!("{} + {}", existing.quantity, appended);
    }
}
