//! Notifications SDK
//!
//! Public contract of the notifications persistence module: models, search
//! criteria, errors and the `NotificationsApi` trait consumed by other modules.

pub mod api;
pub mod errors;
pub mod models;
pub mod search;

pub use api::NotificationsApi;
pub use errors::NotificationsError;
pub use models::{
    AuditInfo, EmailAttachment, EmailRecipient, MessageContent, MessageStatus, NewEmailAttachment,
    NewEmailRecipient, NewNotification, NewNotificationLayout, NewNotificationMessage,
    NewNotificationTemplate, Notification, NotificationChannel, NotificationLayout,
    NotificationMessage, NotificationTemplate, RecipientType, TemplateContent,
};
pub use search::{
    NotificationLayoutSearchCriteria, NotificationSearchCriteria, Paging, SearchResult,
    SortDirection, SortInfo,
};
