use notifications_sdk::{
    EmailAttachment, EmailRecipient, NewEmailAttachment, NewEmailRecipient, NewNotification,
    NewNotificationTemplate, Notification, NotificationChannel, NotificationSearchCriteria,
    NotificationTemplate, SearchResult, SortInfo,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlErr,
};
use tracing::{debug, info, instrument, warn};

use super::{
    AUDIT_USER_MAX_LEN, ID_MAX_LEN, LANGUAGE_CODE_MAX_LEN, NAME_MAX_LEN, validate_len,
    validate_opt_len, validate_required, validate_template_content,
};
use crate::config::SearchConfig;
use crate::domain::error::DomainError;
use crate::infra::search::{SearchPager, SortMap};
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::{
    email_attachment, email_recipient, notification, notification_message, notification_template,
};
use crate::infra::storage::mapper;

const ENTITY: &str = "Notification";

/// Notification definitions and the rows they own.
pub struct NotificationService {
    pager: SearchPager<notification::Entity, Notification>,
}

impl NotificationService {
    #[must_use]
    pub fn new(db: DatabaseConnection, cfg: &SearchConfig) -> Self {
        use notification::Column;

        let sort_map = SortMap::new()
            .insert("id", Column::Id)
            .insert("notification_type", Column::NotificationType)
            .insert("type", Column::NotificationType)
            .insert("tenant_id", Column::TenantId)
            .insert("tenant_type", Column::TenantType)
            .insert("is_active", Column::IsActive)
            .insert("created_date", Column::CreatedDate)
            .insert("modified_date", Column::ModifiedDate);
        Self {
            pager: SearchPager::new(
                db,
                sort_map,
                vec![SortInfo::asc("notification_type")],
                cfg,
            ),
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.pager.db()
    }

    /// Search notification definitions. Results carry the envelope and
    /// channel only; use [`Self::get`] for the full aggregate.
    #[instrument(skip_all, fields(
        notification_type = ?criteria.notification_type,
        tenant_id = ?criteria.tenant_id,
        ids = criteria.object_ids.len()
    ))]
    pub async fn search(
        &self,
        criteria: &NotificationSearchCriteria,
    ) -> Result<SearchResult<Notification>, DomainError> {
        use notification::Column;

        let c = criteria.clone();
        self.pager
            .search(
                criteria,
                &criteria.sort_infos,
                criteria.paging,
                move |mut query| {
                    if !c.object_ids.is_empty() {
                        query = query.filter(Column::Id.is_in(c.object_ids));
                    }
                    if let Some(t) = c.notification_type {
                        query = query.filter(Column::NotificationType.eq(t));
                    }
                    if let Some(t) = c.tenant_id {
                        query = query.filter(Column::TenantId.eq(t));
                    }
                    if let Some(t) = c.tenant_type {
                        query = query.filter(Column::TenantType.eq(t));
                    }
                    if let Some(active) = c.is_active {
                        query = query.filter(Column::IsActive.eq(active));
                    }
                    query
                },
                Notification::try_from,
            )
            .await
    }

    /// Load one notification with its templates, attachments and recipients.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Notification, DomainError> {
        let model = self.find(id).await?;

        let templates = model
            .find_related(notification_template::Entity)
            .order_by_asc(notification_template::Column::CreatedDate)
            .all(self.db())
            .await
            .map_err(db_err)?
            .into_iter()
            .map(NotificationTemplate::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let attachments = model
            .find_related(email_attachment::Entity)
            .order_by_asc(email_attachment::Column::CreatedDate)
            .all(self.db())
            .await
            .map_err(db_err)?
            .into_iter()
            .map(EmailAttachment::from)
            .collect();
        let recipients = model
            .find_related(email_recipient::Entity)
            .order_by_asc(email_recipient::Column::EmailAddress)
            .all(self.db())
            .await
            .map_err(db_err)?
            .into_iter()
            .map(EmailRecipient::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut notification = Notification::try_from(model)?;
        notification.templates = templates;
        notification.attachments = attachments;
        notification.recipients = recipients;
        Ok(notification)
    }

    #[instrument(skip_all, fields(notification_type = %new.notification_type))]
    pub async fn create(&self, new: NewNotification) -> Result<Notification, DomainError> {
        validate_required("notification_type", &new.notification_type, NAME_MAX_LEN)?;
        validate_opt_len("id", new.id.as_deref(), ID_MAX_LEN)?;
        validate_opt_len("tenant_id", new.tenant_id.as_deref(), NAME_MAX_LEN)?;
        validate_opt_len("tenant_type", new.tenant_type.as_deref(), NAME_MAX_LEN)?;
        validate_opt_len("created_by", new.created_by.as_deref(), AUDIT_USER_MAX_LEN)?;
        match &new.channel {
            NotificationChannel::Email { from, to } => {
                validate_opt_len("from", from.as_deref(), NAME_MAX_LEN)?;
                validate_opt_len("to", to.as_deref(), NAME_MAX_LEN)?;
            }
            NotificationChannel::Sms { number } => {
                validate_opt_len("number", number.as_deref(), NAME_MAX_LEN)?;
            }
        }

        let model = mapper::new_notification_am(new)
            .insert(self.db())
            .await
            .map_err(db_err)?;
        self.pager.invalidate();
        info!(id = %model.id, discriminator = %model.discriminator, "Created notification");
        Notification::try_from(model)
    }

    #[instrument(skip(self, template))]
    pub async fn add_template(
        &self,
        notification_id: &str,
        template: NewNotificationTemplate,
    ) -> Result<NotificationTemplate, DomainError> {
        validate_opt_len("id", template.id.as_deref(), ID_MAX_LEN)?;
        validate_opt_len(
            "language_code",
            template.language_code.as_deref(),
            LANGUAGE_CODE_MAX_LEN,
        )?;
        validate_opt_len("created_by", template.created_by.as_deref(), AUDIT_USER_MAX_LEN)?;
        validate_template_content(&template.content)?;
        self.find(notification_id).await?;

        let model = mapper::new_template_am(notification_id, template)
            .insert(self.db())
            .await
            .map_err(db_err)?;
        NotificationTemplate::try_from(model)
    }

    #[instrument(skip(self, attachment))]
    pub async fn add_attachment(
        &self,
        notification_id: &str,
        attachment: NewEmailAttachment,
    ) -> Result<EmailAttachment, DomainError> {
        validate_required("file_name", &attachment.file_name, 512)?;
        validate_required("url", &attachment.url, 2048)?;
        validate_opt_len("id", attachment.id.as_deref(), ID_MAX_LEN)?;
        validate_opt_len("mime_type", attachment.mime_type.as_deref(), 64)?;
        validate_opt_len("size", attachment.size.as_deref(), NAME_MAX_LEN)?;
        validate_opt_len(
            "language_code",
            attachment.language_code.as_deref(),
            LANGUAGE_CODE_MAX_LEN,
        )?;
        validate_opt_len("created_by", attachment.created_by.as_deref(), AUDIT_USER_MAX_LEN)?;
        self.find(notification_id).await?;

        let model = mapper::new_attachment_am(notification_id, attachment)
            .insert(self.db())
            .await
            .map_err(db_err)?;
        Ok(model.into())
    }

    #[instrument(skip(self, recipient))]
    pub async fn add_recipient(
        &self,
        notification_id: &str,
        recipient: NewEmailRecipient,
    ) -> Result<EmailRecipient, DomainError> {
        validate_required("email_address", &recipient.email_address, NAME_MAX_LEN)?;
        validate_opt_len("id", recipient.id.as_deref(), ID_MAX_LEN)?;
        self.find(notification_id).await?;

        let model = mapper::new_recipient_am(notification_id, recipient)
            .insert(self.db())
            .await
            .map_err(db_err)?;
        EmailRecipient::try_from(model)
    }

    /// Delete notifications together with their templates, attachments and
    /// recipients. Refused while any message still references one of them.
    #[instrument(skip_all, fields(ids = ids.len()))]
    pub async fn delete(&self, ids: &[String]) -> Result<(), DomainError> {
        if ids.is_empty() {
            return Ok(());
        }
        for id in ids {
            validate_len("id", id, ID_MAX_LEN)?;
        }

        if let Some(id) = self.referenced_by_message(ids).await? {
            warn!(%id, "Refusing to delete notification referenced by messages");
            return Err(DomainError::NotificationInUse { id });
        }

        let res = match notification::Entity::delete_many()
            .filter(notification::Column::Id.is_in(ids.iter().cloned()))
            .exec(self.db())
            .await
        {
            Ok(res) => res,
            // A message inserted after the check above still trips the FK.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
                return Err(self.in_use_error(ids, e).await);
            }
            Err(e) => return Err(db_err(e)),
        };
        self.pager.invalidate();
        debug!(deleted = res.rows_affected, "Deleted notifications");
        Ok(())
    }

    /// First of `ids` that a message still references.
    async fn referenced_by_message(&self, ids: &[String]) -> Result<Option<String>, DomainError> {
        notification_message::Entity::find()
            .select_only()
            .column(notification_message::Column::NotificationId)
            .filter(notification_message::Column::NotificationId.is_in(ids.iter().cloned()))
            .into_tuple::<String>()
            .one(self.db())
            .await
            .map_err(db_err)
    }

    /// Error for a delete the store refused with a foreign-key violation.
    async fn in_use_error(&self, ids: &[String], e: DbErr) -> DomainError {
        match self.referenced_by_message(ids).await {
            Ok(Some(id)) => {
                warn!(%id, "Notification delete blocked by referencing messages");
                DomainError::NotificationInUse { id }
            }
            _ => db_err(e),
        }
    }

    async fn find(&self, id: &str) -> Result<notification::Model, DomainError> {
        notification::Entity::find_by_id(id.to_owned())
            .one(self.db())
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DbProvider, NotificationsConfig};
    use crate::infra::storage::{db, migrations};
    use notifications_sdk::{MessageContent, NewNotificationMessage};

    async fn service() -> NotificationService {
        let cfg = NotificationsConfig {
            provider: DbProvider::Sqlite,
            url: "sqlite::memory:".to_owned(),
            max_connections: Some(1),
            search: SearchConfig::default(),
        };
        let conn = db::connect(&cfg).await.unwrap();
        migrations::run_migrations(&conn, cfg.provider).await.unwrap();
        NotificationService::new(conn, &cfg.search)
    }

    async fn pin_with_message(svc: &NotificationService, notification_id: &str) {
        mapper::new_message_am(NewNotificationMessage {
            id: None,
            notification_id: notification_id.to_owned(),
            notification_type: None,
            tenant_id: None,
            tenant_type: None,
            language_code: None,
            max_send_attempt_count: 1,
            content: MessageContent::Sms {
                number: None,
                message: None,
            },
            created_by: None,
        })
        .insert(svc.db())
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn store_refusal_names_the_referenced_notification() {
        let svc = service().await;
        let free = svc
            .create(NewNotification::new("a", NotificationChannel::email()))
            .await
            .unwrap();
        let pinned = svc
            .create(NewNotification::new("b", NotificationChannel::sms()))
            .await
            .unwrap();
        pin_with_message(&svc, &pinned.id).await;

        // Skip the pre-check and let the RESTRICT key refuse the delete.
        let ids = vec![free.id.clone(), pinned.id.clone()];
        let err = notification::Entity::delete_many()
            .filter(notification::Column::Id.is_in(ids.clone()))
            .exec(svc.db())
            .await
            .unwrap_err();
        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::ForeignKeyConstraintViolation(_))
        ));

        let mapped = svc.in_use_error(&ids, err).await;
        assert!(
            matches!(mapped, DomainError::NotificationInUse { ref id } if *id == pinned.id),
            "{mapped:?}"
        );
        assert!(svc.get(&free.id).await.is_ok(), "statement rolled back");
    }

    #[tokio::test]
    async fn store_refusal_without_messages_keeps_the_store_error() {
        let svc = service().await;
        let err = DbErr::Custom("FOREIGN KEY constraint failed".to_owned());
        let mapped = svc.in_use_error(&["gone".to_owned()], err).await;
        assert!(matches!(mapped, DomainError::Database { .. }), "{mapped:?}");
    }
}
