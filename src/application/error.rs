// src/application/error.rs
use crate::application::validation::FieldErrors;
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("slug '{0}' is already in use")]
    SlugConflict(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("store failure: {0}")]
    Store(String),
}

impl ApplicationError {
    pub fn validation(field: &str, msg: impl Into<String>) -> Self {
        Self::Validation(FieldErrors::single(field, msg))
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { field, message } => {
                Self::Validation(FieldErrors::single(field, message))
            }
            DomainError::SlugTaken(slug) => Self::SlugConflict(slug),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Persistence(msg) => Self::Store(msg),
        }
    }
}
