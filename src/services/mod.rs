use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod products;

/// Result type returned by every service operation.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload violated a business rule.
    #[error("{0}")]
    Validation(String),
    /// The persistence layer failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
