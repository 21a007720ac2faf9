use cookbook_shared::Recipe;

use crate::Catalog;

impl Catalog {
    pub fn is_favorite(&self, key: &str) -> bool {
        self.favorites.iter().any(|k| k == key)
    }

    /// Add or remove the favorite mark, returning whether the recipe is now a
    /// favorite.
    pub fn toggle_favorite(&mut self, key: &str) -> cookbook_shared::Result<bool> {
        self.require(key)?;

        if self.is_favorite(key) {
            self.favorites.retain(|k| k != key);
            return Ok(false);
        }

        self.favorites.push(key.to_owned());

        Ok(true)
    }

    /// Favorite recipes, in catalog order.
    pub fn favorites(&self) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| self.is_favorite(&r.key))
            .collect()
    }
}
