use std::path::PathBuf;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Store error on {path}: {source}")]
    StoreError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    DomainError(#[from] cookbook_shared::Error),
}

impl AppError {
    pub(crate) fn store(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::StoreError {
            path: path.into(),
            source,
        }
    }
}
