use notifications_sdk::{NewNotificationMessage, NotificationMessage};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};
use tracing::{debug, instrument};

use super::{
    AUDIT_USER_MAX_LEN, ID_MAX_LEN, LANGUAGE_CODE_MAX_LEN, NAME_MAX_LEN, validate_len,
    validate_message_content, validate_opt_len,
};
use crate::domain::error::DomainError;
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::{notification, notification_message};
use crate::infra::storage::mapper;

const ENTITY: &str = "NotificationMessage";

/// Rendered messages. A message pins its notification: the notification
/// cannot be deleted while the message exists.
pub struct MessageService {
    db: DatabaseConnection,
}

impl MessageService {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    #[instrument(skip_all, fields(notification_id = %message.notification_id))]
    pub async fn create(&self, message: NewNotificationMessage) -> Result<NotificationMessage, DomainError> {
        validate_len("notification_id", &message.notification_id, ID_MAX_LEN)?;
        validate_opt_len("id", message.id.as_deref(), ID_MAX_LEN)?;
        validate_opt_len("tenant_id", message.tenant_id.as_deref(), NAME_MAX_LEN)?;
        validate_opt_len("tenant_type", message.tenant_type.as_deref(), NAME_MAX_LEN)?;
        validate_opt_len("notification_type", message.notification_type.as_deref(), NAME_MAX_LEN)?;
        validate_opt_len("created_by", message.created_by.as_deref(), AUDIT_USER_MAX_LEN)?;
        validate_opt_len(
            "language_code",
            message.language_code.as_deref(),
            LANGUAGE_CODE_MAX_LEN,
        )?;
        validate_message_content(&message.content)?;
        if message.max_send_attempt_count < 0 {
            return Err(DomainError::validation(
                "max_send_attempt_count",
                "must not be negative",
            ));
        }

        let exists = notification::Entity::find_by_id(message.notification_id.clone())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_some();
        if !exists {
            return Err(DomainError::not_found("Notification", message.notification_id));
        }

        let model = mapper::new_message_am(message)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        debug!(id = %model.id, "Created notification message");
        NotificationMessage::try_from(model)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<NotificationMessage, DomainError> {
        let model = notification_message::Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;
        NotificationMessage::try_from(model)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let res = notification_message::Entity::delete_by_id(id.to_owned())
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(DomainError::not_found(ENTITY, id));
        }
        Ok(())
    }
}
