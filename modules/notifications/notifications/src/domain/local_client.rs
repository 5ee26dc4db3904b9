use std::sync::Arc;

use async_trait::async_trait;
use notifications_sdk::{
    EmailAttachment, EmailRecipient, NewEmailAttachment, NewEmailRecipient, NewNotification,
    NewNotificationLayout, NewNotificationMessage, NewNotificationTemplate, Notification,
    NotificationLayout, NotificationLayoutSearchCriteria, NotificationMessage,
    NotificationSearchCriteria, NotificationTemplate, NotificationsApi, NotificationsError,
    SearchResult,
};

use crate::domain::service::{LayoutService, MessageService, NotificationService};

/// In-process implementation of `NotificationsApi` backed by the domain services.
pub struct LocalClient {
    layouts: Arc<LayoutService>,
    notifications: Arc<NotificationService>,
    messages: Arc<MessageService>,
}

impl LocalClient {
    #[must_use]
    pub fn new(
        layouts: Arc<LayoutService>,
        notifications: Arc<NotificationService>,
        messages: Arc<MessageService>,
    ) -> Self {
        Self {
            layouts,
            notifications,
            messages,
        }
    }
}

#[async_trait]
impl NotificationsApi for LocalClient {
    async fn search_layouts(
        &self,
        criteria: NotificationLayoutSearchCriteria,
    ) -> Result<SearchResult<NotificationLayout>, NotificationsError> {
        self.layouts.search(&criteria).await.map_err(Into::into)
    }

    async fn get_layouts(&self, ids: &[String]) -> Result<Vec<NotificationLayout>, NotificationsError> {
        self.layouts.get_by_ids(ids).await.map_err(Into::into)
    }

    async fn create_layout(
        &self,
        layout: NewNotificationLayout,
    ) -> Result<NotificationLayout, NotificationsError> {
        self.layouts.create(layout).await.map_err(Into::into)
    }

    async fn update_layout(
        &self,
        layout: NotificationLayout,
    ) -> Result<NotificationLayout, NotificationsError> {
        self.layouts.update(layout).await.map_err(Into::into)
    }

    async fn delete_layouts(&self, ids: &[String]) -> Result<(), NotificationsError> {
        self.layouts.delete(ids).await.map_err(Into::into)
    }

    async fn search_notifications(
        &self,
        criteria: NotificationSearchCriteria,
    ) -> Result<SearchResult<Notification>, NotificationsError> {
        self.notifications.search(&criteria).await.map_err(Into::into)
    }

    async fn get_notification(&self, id: &str) -> Result<Notification, NotificationsError> {
        self.notifications.get(id).await.map_err(Into::into)
    }

    async fn create_notification(
        &self,
        notification: NewNotification,
    ) -> Result<Notification, NotificationsError> {
        self.notifications
            .create(notification)
            .await
            .map_err(Into::into)
    }

    async fn add_template(
        &self,
        notification_id: &str,
        template: NewNotificationTemplate,
    ) -> Result<NotificationTemplate, NotificationsError> {
        self.notifications
            .add_template(notification_id, template)
            .await
            .map_err(Into::into)
    }

    async fn add_attachment(
        &self,
        notification_id: &str,
        attachment: NewEmailAttachment,
    ) -> Result<EmailAttachment, NotificationsError> {
        self.notifications
            .add_attachment(notification_id, attachment)
            .await
            .map_err(Into::into)
    }

    async fn add_recipient(
        &self,
        notification_id: &str,
        recipient: NewEmailRecipient,
    ) -> Result<EmailRecipient, NotificationsError> {
        self.notifications
            .add_recipient(notification_id, recipient)
            .await
            .map_err(Into::into)
    }

    async fn delete_notifications(&self, ids: &[String]) -> Result<(), NotificationsError> {
        self.notifications.delete(ids).await.map_err(Into::into)
    }

    async fn create_message(
        &self,
        message: NewNotificationMessage,
    ) -> Result<NotificationMessage, NotificationsError> {
        self.messages.create(message).await.map_err(Into::into)
    }

    async fn get_message(&self, id: &str) -> Result<NotificationMessage, NotificationsError> {
        self.messages.get(id).await.map_err(Into::into)
    }

    async fn delete_message(&self, id: &str) -> Result<(), NotificationsError> {
        self.messages.delete(id).await.map_err(Into::into)
    }
}
