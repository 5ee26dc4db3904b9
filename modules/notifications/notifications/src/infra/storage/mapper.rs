//! Conversions between `SeaORM` models and SDK contract types.
//!
//! The discriminator column selects the variant when reading; when writing,
//! the variant decides the discriminator and which subtype columns are filled.

use notifications_sdk::{
    AuditInfo, EmailAttachment, EmailRecipient, MessageContent, MessageStatus, NewEmailAttachment,
    NewEmailRecipient, NewNotification, NewNotificationLayout, NewNotificationMessage,
    NewNotificationTemplate, Notification, NotificationChannel, NotificationLayout,
    NotificationMessage, NotificationTemplate, RecipientType, TemplateContent,
};
use sea_orm::ActiveValue::{NotSet, Set};
use time::OffsetDateTime;

use crate::domain::error::DomainError;
use crate::infra::storage::entity::{
    email_attachment, email_recipient, notification, notification_layout, notification_message,
    notification_template,
};

fn audit(
    created_date: OffsetDateTime,
    modified_date: Option<OffsetDateTime>,
    created_by: Option<String>,
    modified_by: Option<String>,
) -> AuditInfo {
    AuditInfo {
        created_date: Some(created_date),
        modified_date,
        created_by,
        modified_by,
    }
}

fn id_or_generated(id: Option<String>) -> sea_orm::ActiveValue<String> {
    // Empty ids are replaced in `before_save`.
    Set(id.unwrap_or_default())
}

/* ---------- notification ---------- */

impl TryFrom<notification::Model> for Notification {
    type Error = DomainError;

    fn try_from(m: notification::Model) -> Result<Self, Self::Error> {
        let channel = match m.discriminator.as_str() {
            notification::EMAIL_DISCRIMINATOR => NotificationChannel::Email {
                from: m.email_from,
                to: m.email_to,
            },
            notification::SMS_DISCRIMINATOR => NotificationChannel::Sms {
                number: m.sms_number,
            },
            other => return Err(DomainError::unknown_discriminator("notification", other)),
        };
        Ok(Notification {
            id: m.id,
            notification_type: m.notification_type,
            tenant_id: m.tenant_id,
            tenant_type: m.tenant_type,
            is_active: m.is_active,
            channel,
            templates: Vec::new(),
            attachments: Vec::new(),
            recipients: Vec::new(),
            audit: audit(m.created_date, m.modified_date, m.created_by, m.modified_by),
        })
    }
}

pub fn new_notification_am(n: NewNotification) -> notification::ActiveModel {
    let (discriminator, email_from, email_to, sms_number) = match n.channel {
        NotificationChannel::Email { from, to } => {
            (notification::EMAIL_DISCRIMINATOR, from, to, None)
        }
        NotificationChannel::Sms { number } => (notification::SMS_DISCRIMINATOR, None, None, number),
    };
    notification::ActiveModel {
        id: id_or_generated(n.id),
        discriminator: Set(discriminator.to_owned()),
        notification_type: Set(n.notification_type),
        tenant_id: Set(n.tenant_id),
        tenant_type: Set(n.tenant_type),
        is_active: n.is_active.map_or(NotSet, Set),
        email_from: Set(email_from),
        email_to: Set(email_to),
        sms_number: Set(sms_number),
        created_date: NotSet,
        modified_date: NotSet,
        created_by: Set(n.created_by.clone()),
        modified_by: Set(n.created_by),
    }
}

/* ---------- template ---------- */

impl TryFrom<notification_template::Model> for NotificationTemplate {
    type Error = DomainError;

    fn try_from(m: notification_template::Model) -> Result<Self, Self::Error> {
        let content = match m.discriminator.as_str() {
            notification_template::EMAIL_DISCRIMINATOR => TemplateContent::Email {
                subject: m.subject,
                body: m.body,
                layout_id: m.notification_layout_id,
            },
            notification_template::SMS_DISCRIMINATOR => TemplateContent::Sms { message: m.message },
            other => {
                return Err(DomainError::unknown_discriminator(
                    "notification_template",
                    other,
                ));
            }
        };
        Ok(NotificationTemplate {
            id: m.id,
            notification_id: m.notification_id,
            language_code: m.language_code,
            content,
            audit: audit(m.created_date, m.modified_date, m.created_by, m.modified_by),
        })
    }
}

pub fn new_template_am(
    notification_id: &str,
    t: NewNotificationTemplate,
) -> notification_template::ActiveModel {
    let mut am = notification_template::ActiveModel {
        id: id_or_generated(t.id),
        notification_id: Set(notification_id.to_owned()),
        language_code: Set(t.language_code),
        subject: Set(None),
        body: Set(None),
        notification_layout_id: Set(None),
        message: Set(None),
        created_by: Set(t.created_by.clone()),
        modified_by: Set(t.created_by),
        ..notification_template::ActiveModel::default()
    };
    match t.content {
        TemplateContent::Email {
            subject,
            body,
            layout_id,
        } => {
            am.discriminator = Set(notification_template::EMAIL_DISCRIMINATOR.to_owned());
            am.subject = Set(subject);
            am.body = Set(body);
            am.notification_layout_id = Set(layout_id);
        }
        TemplateContent::Sms { message } => {
            am.discriminator = Set(notification_template::SMS_DISCRIMINATOR.to_owned());
            am.message = Set(message);
        }
    }
    am
}

/* ---------- message ---------- */

fn parse_status(value: &str) -> Result<MessageStatus, DomainError> {
    match value {
        "Pending" => Ok(MessageStatus::Pending),
        "Sent" => Ok(MessageStatus::Sent),
        "Error" => Ok(MessageStatus::Error),
        other => Err(DomainError::invalid_value("notification_message.status", other)),
    }
}

impl TryFrom<notification_message::Model> for NotificationMessage {
    type Error = DomainError;

    fn try_from(m: notification_message::Model) -> Result<Self, Self::Error> {
        let content = match m.discriminator.as_str() {
            notification_message::EMAIL_DISCRIMINATOR => MessageContent::Email {
                subject: m.subject,
                body: m.body,
                from: m.email_from,
                to: m.email_to,
                cc: m.cc,
                bcc: m.bcc,
            },
            notification_message::SMS_DISCRIMINATOR => MessageContent::Sms {
                number: m.sms_number,
                message: m.message,
            },
            other => {
                return Err(DomainError::unknown_discriminator(
                    "notification_message",
                    other,
                ));
            }
        };
        Ok(NotificationMessage {
            id: m.id,
            notification_id: m.notification_id,
            notification_type: m.notification_type,
            tenant_id: m.tenant_id,
            tenant_type: m.tenant_type,
            language_code: m.language_code,
            status: parse_status(&m.status)?,
            send_attempt_count: m.send_attempt_count,
            max_send_attempt_count: m.max_send_attempt_count,
            last_send_error: m.last_send_error,
            last_send_attempt_date: m.last_send_attempt_date,
            send_date: m.send_date,
            content,
            audit: audit(m.created_date, m.modified_date, m.created_by, m.modified_by),
        })
    }
}

pub fn new_message_am(msg: NewNotificationMessage) -> notification_message::ActiveModel {
    let mut am = notification_message::ActiveModel {
        id: id_or_generated(msg.id),
        notification_id: Set(msg.notification_id),
        notification_type: Set(msg.notification_type),
        tenant_id: Set(msg.tenant_id),
        tenant_type: Set(msg.tenant_type),
        language_code: Set(msg.language_code),
        status: Set(MessageStatus::Pending.as_str().to_owned()),
        send_attempt_count: Set(0),
        max_send_attempt_count: Set(msg.max_send_attempt_count),
        last_send_error: Set(None),
        last_send_attempt_date: Set(None),
        send_date: Set(None),
        subject: Set(None),
        body: Set(None),
        email_from: Set(None),
        email_to: Set(None),
        cc: Set(None),
        bcc: Set(None),
        sms_number: Set(None),
        message: Set(None),
        created_by: Set(msg.created_by.clone()),
        modified_by: Set(msg.created_by),
        ..notification_message::ActiveModel::default()
    };
    match msg.content {
        MessageContent::Email {
            subject,
            body,
            from,
            to,
            cc,
            bcc,
        } => {
            am.discriminator = Set(notification_message::EMAIL_DISCRIMINATOR.to_owned());
            am.subject = Set(subject);
            am.body = Set(body);
            am.email_from = Set(from);
            am.email_to = Set(to);
            am.cc = Set(cc);
            am.bcc = Set(bcc);
        }
        MessageContent::Sms { number, message } => {
            am.discriminator = Set(notification_message::SMS_DISCRIMINATOR.to_owned());
            am.sms_number = Set(number);
            am.message = Set(message);
        }
    }
    am
}

/* ---------- attachment / recipient ---------- */

impl From<email_attachment::Model> for EmailAttachment {
    fn from(m: email_attachment::Model) -> Self {
        EmailAttachment {
            id: m.id,
            notification_id: m.notification_id,
            file_name: m.file_name,
            url: m.url,
            mime_type: m.mime_type,
            size: m.size,
            language_code: m.language_code,
            audit: audit(m.created_date, m.modified_date, m.created_by, m.modified_by),
        }
    }
}

pub fn new_attachment_am(notification_id: &str, a: NewEmailAttachment) -> email_attachment::ActiveModel {
    email_attachment::ActiveModel {
        id: id_or_generated(a.id),
        notification_id: Set(notification_id.to_owned()),
        file_name: Set(a.file_name),
        url: Set(a.url),
        mime_type: Set(a.mime_type),
        size: Set(a.size),
        language_code: Set(a.language_code),
        created_by: Set(a.created_by.clone()),
        modified_by: Set(a.created_by),
        ..email_attachment::ActiveModel::default()
    }
}

impl TryFrom<email_recipient::Model> for EmailRecipient {
    type Error = DomainError;

    fn try_from(m: email_recipient::Model) -> Result<Self, Self::Error> {
        let recipient_type = match m.recipient_type.as_str() {
            "Cc" => RecipientType::Cc,
            "Bcc" => RecipientType::Bcc,
            other => {
                return Err(DomainError::invalid_value(
                    "notification_email_recipient.recipient_type",
                    other,
                ));
            }
        };
        Ok(EmailRecipient {
            id: m.id,
            notification_id: m.notification_id,
            email_address: m.email_address,
            recipient_type,
        })
    }
}

pub fn new_recipient_am(notification_id: &str, r: NewEmailRecipient) -> email_recipient::ActiveModel {
    email_recipient::ActiveModel {
        id: id_or_generated(r.id),
        notification_id: Set(notification_id.to_owned()),
        email_address: Set(r.email_address),
        recipient_type: Set(r.recipient_type.as_str().to_owned()),
    }
}

/* ---------- layout ---------- */

impl From<notification_layout::Model> for NotificationLayout {
    fn from(m: notification_layout::Model) -> Self {
        NotificationLayout {
            id: m.id,
            name: m.name,
            template: m.template,
            audit: audit(m.created_date, m.modified_date, m.created_by, m.modified_by),
        }
    }
}

pub fn new_layout_am(l: NewNotificationLayout) -> notification_layout::ActiveModel {
    notification_layout::ActiveModel {
        id: id_or_generated(l.id),
        name: Set(l.name),
        template: Set(l.template),
        created_by: Set(l.created_by.clone()),
        modified_by: Set(l.created_by),
        ..notification_layout::ActiveModel::default()
    }
}

/// Active model for updating an existing layout. Creation audit is left untouched.
pub fn layout_update_am(l: NotificationLayout) -> notification_layout::ActiveModel {
    notification_layout::ActiveModel {
        id: sea_orm::ActiveValue::Unchanged(l.id),
        name: Set(l.name),
        template: Set(l.template),
        modified_by: Set(l.audit.modified_by),
        ..notification_layout::ActiveModel::default()
    }
}

#[cfg(test)]
#[path = "mapper_tests.rs"]
mod mapper_tests;
