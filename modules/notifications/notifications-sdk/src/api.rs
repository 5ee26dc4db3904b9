//! `NotificationsApi` trait definition.

use async_trait::async_trait;

use crate::errors::NotificationsError;
use crate::models::{
    EmailAttachment, EmailRecipient, NewEmailAttachment, NewEmailRecipient, NewNotification,
    NewNotificationLayout, NewNotificationMessage, NewNotificationTemplate, Notification,
    NotificationLayout, NotificationMessage, NotificationTemplate,
};
use crate::search::{NotificationLayoutSearchCriteria, NotificationSearchCriteria, SearchResult};

/// Public API of the notifications persistence module.
///
/// ```ignore
/// let api: Arc<dyn NotificationsApi> = module.client();
/// let page = api.search_layouts(NotificationLayoutSearchCriteria::default()).await?;
/// ```
#[async_trait]
pub trait NotificationsApi: Send + Sync {
    /// Search layouts; defaults to ordering by name ascending.
    async fn search_layouts(
        &self,
        criteria: NotificationLayoutSearchCriteria,
    ) -> Result<SearchResult<NotificationLayout>, NotificationsError>;

    async fn get_layouts(&self, ids: &[String]) -> Result<Vec<NotificationLayout>, NotificationsError>;

    async fn create_layout(
        &self,
        layout: NewNotificationLayout,
    ) -> Result<NotificationLayout, NotificationsError>;

    async fn update_layout(
        &self,
        layout: NotificationLayout,
    ) -> Result<NotificationLayout, NotificationsError>;

    /// Delete layouts. Email templates pointing at them lose the reference.
    async fn delete_layouts(&self, ids: &[String]) -> Result<(), NotificationsError>;

    async fn search_notifications(
        &self,
        criteria: NotificationSearchCriteria,
    ) -> Result<SearchResult<Notification>, NotificationsError>;

    /// Load a notification together with its templates, attachments and recipients.
    async fn get_notification(&self, id: &str) -> Result<Notification, NotificationsError>;

    async fn create_notification(
        &self,
        notification: NewNotification,
    ) -> Result<Notification, NotificationsError>;

    async fn add_template(
        &self,
        notification_id: &str,
        template: NewNotificationTemplate,
    ) -> Result<NotificationTemplate, NotificationsError>;

    async fn add_attachment(
        &self,
        notification_id: &str,
        attachment: NewEmailAttachment,
    ) -> Result<EmailAttachment, NotificationsError>;

    async fn add_recipient(
        &self,
        notification_id: &str,
        recipient: NewEmailRecipient,
    ) -> Result<EmailRecipient, NotificationsError>;

    /// Delete notifications with everything they own. Fails with
    /// `NotificationInUse` while messages still reference one of them.
    async fn delete_notifications(&self, ids: &[String]) -> Result<(), NotificationsError>;

    async fn create_message(
        &self,
        message: NewNotificationMessage,
    ) -> Result<NotificationMessage, NotificationsError>;

    async fn get_message(&self, id: &str) -> Result<NotificationMessage, NotificationsError>;

    async fn delete_message(&self, id: &str) -> Result<(), NotificationsError>;
}
