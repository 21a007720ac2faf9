pub mod config;
pub mod error;
pub mod observability;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use store::Store;
