use notifications_sdk::NotificationsError;
use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Unique constraint violated: {message}")]
    Conflict { message: String },

    #[error("Referenced row missing or still referenced: {message}")]
    ReferenceViolation { message: String },

    #[error("Notification {id} is still referenced by messages")]
    NotificationInUse { id: String },

    #[error("Invalid search criteria: {message}")]
    InvalidCriteria { message: String },

    #[error("Unknown discriminator '{value}' in table {table}")]
    UnknownDiscriminator { table: &'static str, value: String },

    #[error("Invalid stored value for {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
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

    pub fn reference_violation(message: impl Into<String>) -> Self {
        Self::ReferenceViolation {
            message: message.into(),
        }
    }

    pub fn invalid_criteria(message: impl Into<String>) -> Self {
        Self::InvalidCriteria {
            message: message.into(),
        }
    }

    pub fn unknown_discriminator(table: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownDiscriminator {
            table,
            value: value.into(),
        }
    }

    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for NotificationsError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::NotFound { entity, id } => NotificationsError::not_found(entity, id),
            DomainError::Conflict { message } => NotificationsError::conflict(message),
            DomainError::NotificationInUse { id } => NotificationsError::NotificationInUse { id },
            DomainError::InvalidCriteria { message } => {
                NotificationsError::invalid_criteria(message)
            }
            DomainError::ReferenceViolation { message } => NotificationsError::validation(message),
            DomainError::Validation { field, message } => {
                NotificationsError::validation(format!("{field}: {message}"))
            }
            DomainError::UnknownDiscriminator { .. }
            | DomainError::InvalidValue { .. }
            | DomainError::Database { .. } => NotificationsError::internal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_faults_are_hidden_from_consumers() {
        let err: NotificationsError = DomainError::database("disk I/O error").into();
        assert_eq!(err, NotificationsError::Internal);

        let err: NotificationsError = DomainError::unknown_discriminator("notification", "Push").into();
        assert_eq!(err, NotificationsError::Internal);
    }

    #[test]
    fn client_faults_keep_their_meaning() {
        let err: NotificationsError = DomainError::invalid_criteria("unknown sort column 'foo'").into();
        assert!(matches!(err, NotificationsError::InvalidCriteria { .. }));

        let err: NotificationsError = DomainError::NotificationInUse { id: "n1".to_owned() }.into();
        assert_eq!(
            err,
            NotificationsError::NotificationInUse {
                id: "n1".to_owned()
            }
        );

        let err: NotificationsError = DomainError::validation("name", "must not be empty").into();
        assert_eq!(err, NotificationsError::validation("name: must not be empty"));
    }
}
