use crate::domain::validation::ValidationErrors;
use crate::storage::StorageError;

/// Failure of a domain operation. Each one is scoped to a single request.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The identifier does not match any stored entity
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("caregiver {caregiver_id} is not assigned to child {child_id}")]
    NotAssigned { caregiver_id: i64, child_id: i64 },

    /// The integrity guard refused the deletion; carries the user-facing reason
    #[error("{0}")]
    Blocked(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => ServiceError::NotFound { entity, id },
            StorageError::Database(e) => ServiceError::Database(e),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
