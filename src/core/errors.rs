use std::fmt;

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Coarse classification of a [`UserError`], for callers mapping failures to responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    Validation,
    Credential,
    NotFound,
    Storage,
}

#[derive(Error, Debug, Serialize)]
pub enum UserError {
    /// A field failed validation; nothing was hashed or written
    #[error("Invalid input for field `{0}`: {1}")]
    InvalidInput(String, FieldError),

    /// Salt generation, hashing or verification failed
    #[error("Credential error: {0}")]
    Credential(String),

    #[error("No such user exists!")]
    UserNotFound(Uuid),

    /// Failure reported by the underlying store, passed through as-is
    #[error("Storage error: {0}")]
    Storage(String),
}

impl UserError {
    pub(crate) fn invalid_field(field: &str, title: &str, description: String) -> Self {
        UserError::InvalidInput(
            field.to_string(),
            FieldError {
                field: field.to_string(),
                title: title.to_string(),
                description,
            },
        )
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::InvalidInput(..) => ErrorKind::Validation,
            UserError::Credential(_) => ErrorKind::Credential,
            UserError::UserNotFound(_) => ErrorKind::NotFound,
            UserError::Storage(_) => ErrorKind::Storage,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// HTTP-equivalent status for the error.
    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Credential | ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
