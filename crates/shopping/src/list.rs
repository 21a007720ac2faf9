use std::collections::BTreeMap;

use cookbook_shared::MenuEntry;
use indexmap::IndexMap;
use serde::Serialize;

use crate::aggregation::{AggregatedIngredient, IngredientAggregationService};

/// Shopping list lines sharing a first letter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingGroup<'a> {
    pub letter: String,
    pub items: Vec<&'a AggregatedIngredient>,
}

/// Group an ingredient name falls under: its first character, upper-cased.
pub fn group_key(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// The shopping list for a menu.
///
/// Regenerated from scratch whenever the menu changes; the checked flags are
/// the only state layered on top and are restored with [`ShoppingList::apply_checked`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    items: IndexMap<String, AggregatedIngredient>,
}

impl ShoppingList {
    pub fn generate(entries: &[MenuEntry], service: &IngredientAggregationService) -> Self {
        Self {
            items: service.aggregate(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&AggregatedIngredient> {
        self.items.get(key)
    }

    /// Lines in the order their bucket was first created.
    pub fn items(&self) -> impl Iterator<Item = &AggregatedIngredient> {
        self.items.values()
    }

    /// Flip the checked flag of one line, returning the new state.
    pub fn toggle(&mut self, key: &str) -> cookbook_shared::Result<bool> {
        let Some(item) = self.items.get_mut(key) else {
            cookbook_shared::not_found!("ingredient '{}'", key);
        };

        item.checked = !item.checked;

        Ok(item.checked)
    }

    pub fn check_all(&mut self) {
        self.set_all(true);
    }

    pub fn uncheck_all(&mut self) {
        self.set_all(false);
    }

    fn set_all(&mut self, checked: bool) {
        for item in self.items.values_mut() {
            item.checked = checked;
        }
    }

    /// Mark the given lines as checked. Keys that are no longer on the list
    /// are skipped.
    pub fn apply_checked<'a>(&mut self, keys: impl IntoIterator<Item = &'a String>) {
        for key in keys {
            if let Some(item) = self.items.get_mut(key) {
                item.checked = true;
            }
        }
    }

    pub fn checked_keys(&self) -> Vec<String> {
        self.items
            .values()
            .filter(|i| i.checked)
            .map(|i| i.key.to_owned())
            .collect()
    }

    /// Lines grouped by first letter, groups sorted alphabetically and lines
    /// kept in creation order within a group.
    pub fn groups(&self) -> Vec<ShoppingGroup<'_>> {
        let mut groups: BTreeMap<String, Vec<&AggregatedIngredient>> = BTreeMap::new();

        for item in self.items.values() {
            groups.entry(group_key(&item.name)).or_default().push(item);
        }

        groups
            .into_iter()
            .map(|(letter, items)| ShoppingGroup { letter, items })
            .collect()
    }
}
