// Application error type and result alias built on thiserror.
use thiserror::Error;

pub mod response;
pub mod store;

pub use store::{StoreError, StoreResult};

#[derive(Error, Debug)]
pub enum AppError {
    // Every failed rule, in form order
    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Chart error: {0}")]
    Chart(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(vec![message.into()])
    }
}

pub type AppResult<T> = Result<T, AppError>;
