//! Public models for the notifications module.
//!
//! Entities that share one physical table in storage (notifications,
//! templates, messages) are modelled as a common envelope plus a tagged
//! channel variant. The storage discriminator is derived from the variant.

use time::OffsetDateTime;

/// Audit trail recorded by the write path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditInfo {
    pub created_date: Option<OffsetDateTime>,
    pub modified_date: Option<OffsetDateTime>,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
}

/// Channel-specific part of a notification definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationChannel {
    Email {
        from: Option<String>,
        to: Option<String>,
    },
    Sms {
        number: Option<String>,
    },
}

impl NotificationChannel {
    #[must_use]
    pub fn email() -> Self {
        Self::Email {
            from: None,
            to: None,
        }
    }

    #[must_use]
    pub fn sms() -> Self {
        Self::Sms { number: None }
    }
}

/// Notification definition, the aggregate root for templates, attachments
/// and recipients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub notification_type: String,
    pub tenant_id: Option<String>,
    pub tenant_type: Option<String>,
    pub is_active: bool,
    pub channel: NotificationChannel,
    pub templates: Vec<NotificationTemplate>,
    pub attachments: Vec<EmailAttachment>,
    pub recipients: Vec<EmailRecipient>,
    pub audit: AuditInfo,
}

/// Data for creating a notification.
///
/// `is_active` left as `None` falls back to the store default (`true`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub id: Option<String>,
    pub notification_type: String,
    pub tenant_id: Option<String>,
    pub tenant_type: Option<String>,
    pub is_active: Option<bool>,
    pub channel: NotificationChannel,
    pub created_by: Option<String>,
}

impl NewNotification {
    pub fn new(notification_type: impl Into<String>, channel: NotificationChannel) -> Self {
        Self {
            id: None,
            notification_type: notification_type.into(),
            tenant_id: None,
            tenant_type: None,
            is_active: None,
            channel,
            created_by: None,
        }
    }

    #[must_use]
    pub fn with_tenant(mut self, tenant_id: impl Into<String>, tenant_type: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self.tenant_type = Some(tenant_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateContent {
    Email {
        subject: Option<String>,
        body: Option<String>,
        /// Optional reference to a shared layout; cleared when the layout is removed.
        layout_id: Option<String>,
    },
    Sms {
        message: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTemplate {
    pub id: String,
    pub notification_id: String,
    pub language_code: Option<String>,
    pub content: TemplateContent,
    pub audit: AuditInfo,
}

impl NotificationTemplate {
    /// Layout referenced by an email template, if any.
    #[must_use]
    pub fn layout_id(&self) -> Option<&str> {
        match &self.content {
            TemplateContent::Email { layout_id, .. } => layout_id.as_deref(),
            TemplateContent::Sms { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotificationTemplate {
    pub id: Option<String>,
    pub language_code: Option<String>,
    pub content: TemplateContent,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageStatus {
    #[default]
    Pending,
    Sent,
    Error,
}

impl MessageStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Sent => "Sent",
            Self::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    Email {
        subject: Option<String>,
        body: Option<String>,
        from: Option<String>,
        to: Option<String>,
        cc: Option<String>,
        bcc: Option<String>,
    },
    Sms {
        number: Option<String>,
        message: Option<String>,
    },
}

/// Rendered message produced from a notification.
///
/// Messages only reference their notification: a notification cannot be
/// deleted while messages point at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub id: String,
    pub notification_id: String,
    pub notification_type: Option<String>,
    pub tenant_id: Option<String>,
    pub tenant_type: Option<String>,
    pub language_code: Option<String>,
    pub status: MessageStatus,
    pub send_attempt_count: i32,
    pub max_send_attempt_count: i32,
    pub last_send_error: Option<String>,
    pub last_send_attempt_date: Option<OffsetDateTime>,
    pub send_date: Option<OffsetDateTime>,
    pub content: MessageContent,
    pub audit: AuditInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotificationMessage {
    pub id: Option<String>,
    pub notification_id: String,
    pub notification_type: Option<String>,
    pub tenant_id: Option<String>,
    pub tenant_type: Option<String>,
    pub language_code: Option<String>,
    pub max_send_attempt_count: i32,
    pub content: MessageContent,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAttachment {
    pub id: String,
    pub notification_id: String,
    pub file_name: String,
    pub url: String,
    pub mime_type: Option<String>,
    pub size: Option<String>,
    pub language_code: Option<String>,
    pub audit: AuditInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmailAttachment {
    pub id: Option<String>,
    pub file_name: String,
    pub url: String,
    pub mime_type: Option<String>,
    pub size: Option<String>,
    pub language_code: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientType {
    Cc,
    Bcc,
}

impl RecipientType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cc => "Cc",
            Self::Bcc => "Bcc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRecipient {
    pub id: String,
    pub notification_id: String,
    pub email_address: String,
    pub recipient_type: RecipientType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmailRecipient {
    pub id: Option<String>,
    pub email_address: String,
    pub recipient_type: RecipientType,
}

/// Shared wrapper markup for email templates. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationLayout {
    pub id: String,
    pub name: String,
    pub template: Option<String>,
    pub audit: AuditInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotificationLayout {
    pub id: Option<String>,
    pub name: String,
    pub template: Option<String>,
    pub created_by: Option<String>,
}

impl NewNotificationLayout {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            template: None,
            created_by: None,
        }
    }
}
