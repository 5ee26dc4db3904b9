//! Public error types for the notifications module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `NotificationsApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationsError {
    /// Entity with the specified ID was not found.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A uniqueness rule was violated, e.g. a duplicate layout name.
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// The notification is still referenced by messages and cannot be deleted.
    #[error("Notification {id} is referenced by messages")]
    NotificationInUse { id: String },

    /// Search criteria refer to something that cannot be queried.
    #[error("Invalid search criteria: {message}")]
    InvalidCriteria { message: String },

    /// Validation error with the provided data.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// An internal error occurred.
    #[error("Internal error")]
    Internal,
}

impl NotificationsError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn invalid_criteria(message: impl Into<String>) -> Self {
        Self::InvalidCriteria {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
