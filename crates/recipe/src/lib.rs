mod catalog;
mod favorite;
mod query;
mod rating;

pub use catalog::*;
pub use query::*;
pub use rating::*;
