//! Repository error types.

use sea_orm::DbErr;
use tripsplit_shared::AppError;
use uuid::Uuid;

/// Errors raised by participant and expense repositories.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// An expense names a payer that is not on the roster.
    #[error("Payer {0} is not a registered participant")]
    PayerNotFound(Uuid),

    /// Another participant already uses this email.
    #[error("Email '{0}' is already registered")]
    DuplicateEmail(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match &err {
            RepositoryError::PayerNotFound(_) => Self::Validation(err.to_string()),
            RepositoryError::DuplicateEmail(_) => Self::Conflict(err.to_string()),
            RepositoryError::Database(e) => Self::Database(e.to_string()),
        }
    }
}
