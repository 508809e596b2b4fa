use std::fmt::Display;

use thiserror::Error;

/// The single error kind raised by every domain operation.
///
/// Each variant maps to exactly one HTTP status; the inbound layer translates
/// it once, at the boundary. `Internal` carries diagnostic detail for the logs
/// only and is never shown to clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("{0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// HTTP status associated with this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            DomainError::InvalidCredentials | DomainError::Validation(_) => 400,
            DomainError::Unauthorized => 401,
            DomainError::Forbidden(_) => 403,
            DomainError::NotFound(_) => 404,
            DomainError::Conflict(_) => 409,
            DomainError::Internal(_) => 500,
        }
    }

    /// Lookup miss for `entity` identified by `identifier`.
    pub fn not_found(entity: &str, identifier: impl Display) -> Self {
        DomainError::NotFound(format!(
            "{} not found with identifier: {}",
            entity, identifier
        ))
    }

    pub fn username_taken() -> Self {
        DomainError::Conflict("Username already exists".to_string())
    }
}
