use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Catalog;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RateInput {
    pub key: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5 stars"))]
    pub stars: u8,
}

impl Catalog {
    pub fn rate(&mut self, input: RateInput) -> cookbook_shared::Result<()> {
        input.validate()?;
        self.require(&input.key)?;

        tracing::debug!(key = %input.key, stars = input.stars, "recipe rated");
        self.ratings.insert(input.key, input.stars);

        Ok(())
    }

    pub fn rating(&self, key: &str) -> Option<u8> {
        self.ratings.get(key).copied()
    }
}
