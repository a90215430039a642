use thiserror::Error;

/// Result type returned by every repository operation.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound,
    /// A connection could not be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => RepositoryError::NotFound,
            other => RepositoryError::Database(other),
        }
    }
}
