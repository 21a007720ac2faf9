use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::recipe::Recipe;

/// A recipe planned on the menu, `count` times.
///
/// The recipe is a snapshot taken when it was added; later edits or deletion
/// in the catalog do not reach into the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub recipe: Recipe,
    pub count: NonZeroU32,
}

impl MenuEntry {
    pub fn new(recipe: Recipe, count: NonZeroU32) -> Self {
        Self { recipe, count }
    }

    pub fn once(recipe: Recipe) -> Self {
        Self::new(recipe, NonZeroU32::MIN)
    }

    pub fn key(&self) -> &str {
        &self.recipe.key
    }
}
