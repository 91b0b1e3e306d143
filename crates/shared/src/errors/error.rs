use crate::errors::{RepositoryError, ServiceError};
use serde::Serialize;

/// Flat error shape handed to the embedding request layer.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        let status = match err {
            ServiceError::NotFound(_) | ServiceError::Repo(RepositoryError::NotFound) => {
                "not_found"
            }
            ServiceError::Validation { .. } => "validation_error",
            ServiceError::EmptyCart => "empty_cart",
            ServiceError::InvalidTransition { .. } => "invalid_transition",
            ServiceError::Forbidden(_) => "forbidden",
            _ => "error",
        };

        Self {
            status: status.to_string(),
            message: err.to_string(),
        }
    }
}
