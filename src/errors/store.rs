use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Project {0} not found")]
    ProjectNotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
