//! Failure taxonomy shared by every domain operation
//!
//! All failures are terminal: an operation either completes or fails with
//! exactly one of these variants, carrying a fixed human-readable message
//! that is surfaced to the caller verbatim.

use crate::ports::PortError;
use thiserror::Error;

/// Failure type for domain operations
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed or missing input
    #[error("{0}")]
    Invalid(String),

    /// The referenced record does not exist
    #[error("{0}")]
    NotFound(String),

    /// The write conflicts with an existing record
    #[error("{0}")]
    Conflict(String),

    /// The storage port failed
    #[error(transparent)]
    Port(#[from] PortError),
}

impl DomainError {
    pub fn invalid(message: impl Into<String>) -> Self {
        DomainError::Invalid(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict(message.into())
    }

    /// Returns true if this failure means the record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }

    /// Returns true if this failure is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, DomainError::Conflict(_))
    }

    /// Returns true if this failure rejects the input itself
    pub fn is_invalid(&self) -> bool {
        matches!(self, DomainError::Invalid(_))
    }
}

/// Converts a lookup miss into the typed not-found failure
///
/// Every lookup that must succeed goes through this extension instead of
/// matching on `Option` at each call site, so the not-found message for a
/// given record kind is decided exactly once.
pub trait OrNotFound<T> {
    fn or_not_found(self, message: &str) -> Result<T, DomainError>;
}

impl<T> OrNotFound<T> for Option<T> {
    fn or_not_found(self, message: &str) -> Result<T, DomainError> {
        self.ok_or_else(|| DomainError::NotFound(message.to_string()))
    }
}
