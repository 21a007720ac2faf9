mod error;
pub mod menu;
pub mod recipe;

pub use error::*;
pub use menu::MenuEntry;
pub use recipe::{Ingredient, NewIngredient, NewRecipe, Recipe};
