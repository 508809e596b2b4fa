use thiserror::Error;

use crate::domain::errors::DomainError;

/// Error for followed item name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FollowedNameError {
    #[error("Name is required.")]
    Empty,
}

/// Error for level type parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LevelTypeError {
    #[error("Invalid level type: {0}")]
    Invalid(String),
}

impl From<FollowedNameError> for DomainError {
    fn from(err: FollowedNameError) -> Self {
        DomainError::Validation(err.to_string())
    }
}

impl From<LevelTypeError> for DomainError {
    fn from(err: LevelTypeError) -> Self {
        DomainError::Validation(err.to_string())
    }
}
