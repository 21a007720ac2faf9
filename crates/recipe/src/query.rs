use cookbook_shared::Recipe;

use crate::Catalog;

/// Criteria for browsing the catalog. The default filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    /// Case-insensitive match against title, description and tags.
    pub query: Option<String>,
    /// Selected categories; empty means all categories.
    pub categories: Vec<String>,
    /// Upper bound on prep plus cook time, in minutes.
    pub max_total_time: Option<u32>,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(query) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let query = query.to_lowercase();
            let found = recipe.title.to_lowercase().contains(&query)
                || recipe.description.to_lowercase().contains(&query)
                || recipe.tags.iter().any(|t| t.to_lowercase().contains(&query));

            if !found {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&recipe.category) {
            return false;
        }

        match self.max_total_time {
            Some(max) => recipe.total_time() <= max,
            None => true,
        }
    }
}

impl Catalog {
    /// Recipes matching `filter`, newest first.
    pub fn filter(&self, filter: &RecipeFilter) -> Vec<&Recipe> {
        let mut recipes: Vec<&Recipe> = self.recipes.iter().filter(|r| filter.matches(r)).collect();
        recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        recipes
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for recipe in &self.recipes {
            if !categories.contains(&recipe.category.as_str()) {
                categories.push(&recipe.category);
            }
        }

        categories
    }
}
