pub mod aggregation;
pub mod list;
pub mod quantity;

// Re-export commonly used types
pub use aggregation::{AggregatedIngredient, IngredientAggregationService, MergePolicy, bucket_key};
pub use list::{ShoppingGroup, ShoppingList, group_key};
pub use quantity::{format_quantity, parse_quantity};
