use thiserror::Error;

use crate::domain::errors::DomainError;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username cannot be null or empty")]
    Empty,

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for plaintext password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password cannot be null or empty")]
    Empty,
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

impl From<UsernameError> for DomainError {
    fn from(err: UsernameError) -> Self {
        DomainError::Validation(err.to_string())
    }
}

impl From<PasswordError> for DomainError {
    fn from(err: PasswordError) -> Self {
        DomainError::Validation(err.to_string())
    }
}

impl From<RoleError> for DomainError {
    fn from(err: RoleError) -> Self {
        // Roles only come from storage, so a bad one is a data problem.
        DomainError::Internal(err.to_string())
    }
}
