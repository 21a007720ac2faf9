use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::{Validate, ValidationError};

pub const UNCATEGORIZED: &str = "Uncategorized";

/// One line of a recipe's ingredient list.
///
/// `quantity` is free text: most recipes write a number ("2", "0.5") but
/// values like "to taste" or "a pinch" are legal and must survive untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub key: String,
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub key: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub cook_time: u32,
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Recipe {
    /// Prep plus cook time, in minutes.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewIngredient {
    pub name: String,
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
}

impl NewIngredient {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    /// Rows left half-filled in the form are dropped on save.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() || self.quantity.trim().is_empty()
    }
}

/// Input for creating a recipe. Keys and the creation timestamp are
/// assigned by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    #[validate(custom(function = "not_blank", message = "Recipe title is required"))]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default = "default_servings")]
    #[validate(range(min = 1, message = "Servings must be at least 1"))]
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<NewIngredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Default for NewRecipe {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: String::new(),
            description: String::new(),
            prep_time: 0,
            cook_time: 0,
            servings: default_servings(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            tags: Vec::new(),
        }
    }
}

fn default_servings() -> u32 {
    4
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}
