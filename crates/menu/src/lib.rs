use std::num::NonZeroU32;

use cookbook_shared::{MenuEntry, Recipe};
use serde::{Deserialize, Serialize};

/// Recipes planned for the coming meals, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key() == key)
    }

    /// How many times the recipe is planned; 0 when it is not on the menu.
    pub fn count(&self, key: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.key() == key)
            .map(|e| e.count.get())
            .unwrap_or_default()
    }

    /// Sum of all entry counts.
    pub fn total_servings(&self) -> u32 {
        self.entries.iter().map(|e| e.count.get()).sum()
    }

    /// Plan the recipe once more. A recipe already on the menu gets its count
    /// bumped instead of a second entry.
    pub fn add(&mut self, recipe: Recipe) -> u32 {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key() == recipe.key) {
            entry.count = entry.count.saturating_add(1);
            return entry.count.get();
        }

        tracing::debug!(key = %recipe.key, "recipe added to menu");
        self.entries.push(MenuEntry::once(recipe));

        NonZeroU32::MIN.get()
    }

    pub fn remove(&mut self, key: &str) -> cookbook_shared::Result<MenuEntry> {
        let Some(index) = self.entries.iter().position(|e| e.key() == key) else {
            cookbook_shared::not_found!("menu entry '{}'", key);
        };

        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn increase(&mut self, key: &str) -> cookbook_shared::Result<u32> {
        let entry = self.entry_mut(key)?;
        entry.count = entry.count.saturating_add(1);

        Ok(entry.count.get())
    }

    /// Lower the count by one, stopping at 1. Use [`Menu::remove`] to drop the
    /// recipe entirely.
    pub fn decrease(&mut self, key: &str) -> cookbook_shared::Result<u32> {
        let entry = self.entry_mut(key)?;
        if let Some(count) = NonZeroU32::new(entry.count.get() - 1) {
            entry.count = count;
        }

        Ok(entry.count.get())
    }

    fn entry_mut(&mut self, key: &str) -> cookbook_shared::Result<&mut MenuEntry> {
        match self.entries.iter_mut().find(|e| e.key() == key) {
            Some(entry) => Ok(entry),
            None => cookbook_shared::not_found!("menu entry '{}'", key),
        }
    }
}
