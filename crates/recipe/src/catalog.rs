use std::collections::BTreeMap;

use cookbook_shared::{Ingredient, NewRecipe, Recipe, recipe::UNCATEGORIZED};
use time::OffsetDateTime;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

/// The user's recipe book together with the favorites and star ratings
/// attached to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub(crate) recipes: Vec<Recipe>,
    pub(crate) favorites: Vec<String>,
    pub(crate) ratings: BTreeMap<String, u8>,
}

impl Catalog {
    pub fn new(
        recipes: Vec<Recipe>,
        favorites: Vec<String>,
        ratings: BTreeMap<String, u8>,
    ) -> Self {
        Self {
            recipes,
            favorites,
            ratings,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn favorite_keys(&self) -> &[String] {
        &self.favorites
    }

    pub fn ratings(&self) -> &BTreeMap<String, u8> {
        &self.ratings
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.key == key)
    }

    pub(crate) fn require(&self, key: &str) -> cookbook_shared::Result<&Recipe> {
        match self.get(key) {
            Some(recipe) => Ok(recipe),
            None => cookbook_shared::not_found!("recipe '{}'", key),
        }
    }

    pub fn create(&mut self, input: NewRecipe) -> cookbook_shared::Result<&Recipe> {
        self.create_at(input, OffsetDateTime::now_utc())
    }

    /// Validate `input` and add it to the catalog.
    ///
    /// Half-filled ingredient rows and blank instructions are dropped, a missing
    /// category becomes "Uncategorized" and tags are trimmed and de-duplicated.
    pub fn create_at(
        &mut self,
        input: NewRecipe,
        created_at: OffsetDateTime,
    ) -> cookbook_shared::Result<&Recipe> {
        input.validate()?;

        let ingredients = input
            .ingredients
            .into_iter()
            .filter(|i| !i.is_blank())
            .map(|i| Ingredient {
                key: Uuid::new_v4().to_string(),
                name: i.name.trim().to_owned(),
                quantity: i.quantity.trim().to_owned(),
                unit: i.unit.trim().to_owned(),
            })
            .collect();

        let instructions = input
            .instructions
            .into_iter()
            .filter(|i| !i.trim().is_empty())
            .collect();

        let mut tags: Vec<String> = Vec::new();
        for tag in input.tags {
            let tag = tag.trim();
            if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_owned());
            }
        }

        let category = match input.category.trim() {
            "" => UNCATEGORIZED.to_owned(),
            category => category.to_owned(),
        };

        let recipe = Recipe {
            key: Uuid::new_v4().to_string(),
            title: input.title.trim().to_owned(),
            category,
            description: input.description,
            prep_time: input.prep_time,
            cook_time: input.cook_time,
            servings: input.servings,
            ingredients,
            instructions,
            tags,
            created_at,
        };

        tracing::debug!(key = %recipe.key, title = %recipe.title, "recipe created");

        self.recipes.push(recipe);

        let Some(recipe) = self.recipes.last() else {
            cookbook_shared::bail!("recipe was not stored");
        };

        Ok(recipe)
    }

    /// Add an already keyed recipe, e.g. one exported from another cookbook.
    pub fn insert(&mut self, recipe: Recipe) -> cookbook_shared::Result<()> {
        if self.get(&recipe.key).is_some() {
            let mut errors = ValidationErrors::new();
            errors.add(
                "key",
                ValidationError::new("duplicate_key")
                    .with_message(format!("recipe '{}' already exists", recipe.key).into()),
            );

            return Err(errors.into());
        }

        self.recipes.push(recipe);

        Ok(())
    }

    /// Delete a recipe along with its favorite mark and rating.
    pub fn remove(&mut self, key: &str) -> cookbook_shared::Result<Recipe> {
        let Some(index) = self.recipes.iter().position(|r| r.key == key) else {
            cookbook_shared::not_found!("recipe '{}'", key);
        };

        self.favorites.retain(|k| k != key);
        self.ratings.remove(key);

        let recipe = self.recipes.remove(index);
        tracing::debug!(key = %recipe.key, "recipe removed");

        Ok(recipe)
    }
}
