use sea_orm::ActiveValue;
use time::OffsetDateTime;

use super::*;

fn notification_model(discriminator: &str) -> notification::Model {
    notification::Model {
        id: "n1".to_owned(),
        discriminator: discriminator.to_owned(),
        notification_type: "OrderCreated".to_owned(),
        tenant_id: Some("store-1".to_owned()),
        tenant_type: Some("Store".to_owned()),
        is_active: true,
        email_from: Some("shop@example.com".to_owned()),
        email_to: None,
        sms_number: Some("+100".to_owned()),
        created_date: OffsetDateTime::UNIX_EPOCH,
        modified_date: None,
        created_by: Some("admin".to_owned()),
        modified_by: None,
    }
}

#[test]
fn notification_variant_follows_discriminator() {
    let email = Notification::try_from(notification_model(notification::EMAIL_DISCRIMINATOR)).unwrap();
    assert_eq!(
        email.channel,
        NotificationChannel::Email {
            from: Some("shop@example.com".to_owned()),
            to: None,
        }
    );
    assert_eq!(email.audit.created_by.as_deref(), Some("admin"));

    let sms = Notification::try_from(notification_model(notification::SMS_DISCRIMINATOR)).unwrap();
    assert_eq!(
        sms.channel,
        NotificationChannel::Sms {
            number: Some("+100".to_owned())
        }
    );
}

#[test]
fn unknown_discriminator_is_rejected() {
    let err = Notification::try_from(notification_model("PushNotificationEntity")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::UnknownDiscriminator {
            table: "notification",
            ..
        }
    ));
}

#[test]
fn new_sms_notification_leaves_email_columns_empty() {
    let am = new_notification_am(NewNotification::new(
        "OrderShipped",
        NotificationChannel::Sms {
            number: Some("+42".to_owned()),
        },
    ));
    assert_eq!(
        am.discriminator,
        ActiveValue::Set(notification::SMS_DISCRIMINATOR.to_owned())
    );
    assert_eq!(am.email_from, ActiveValue::Set(None));
    assert_eq!(am.sms_number, ActiveValue::Set(Some("+42".to_owned())));
    assert!(am.is_active.is_not_set(), "store default applies");
}

#[test]
fn explicit_is_active_is_written() {
    let mut new = NewNotification::new("OrderShipped", NotificationChannel::email());
    new.is_active = Some(false);
    let am = new_notification_am(new);
    assert_eq!(am.is_active, ActiveValue::Set(false));
}

#[test]
fn email_template_keeps_layout_reference() {
    let am = new_template_am(
        "n1",
        NewNotificationTemplate {
            id: None,
            language_code: Some("en-US".to_owned()),
            content: TemplateContent::Email {
                subject: Some("Hi".to_owned()),
                body: Some("<p>Hi</p>".to_owned()),
                layout_id: Some("l1".to_owned()),
            },
            created_by: None,
        },
    );
    assert_eq!(
        am.discriminator,
        ActiveValue::Set(notification_template::EMAIL_DISCRIMINATOR.to_owned())
    );
    assert_eq!(am.notification_id, ActiveValue::Set("n1".to_owned()));
    assert_eq!(am.notification_layout_id, ActiveValue::Set(Some("l1".to_owned())));
    assert_eq!(am.message, ActiveValue::Set(None));
}

fn message_model(status: &str) -> notification_message::Model {
    notification_message::Model {
        id: "m1".to_owned(),
        discriminator: notification_message::SMS_DISCRIMINATOR.to_owned(),
        notification_id: "n1".to_owned(),
        notification_type: Some("OrderShipped".to_owned()),
        tenant_id: None,
        tenant_type: None,
        language_code: None,
        status: status.to_owned(),
        send_attempt_count: 1,
        max_send_attempt_count: 3,
        last_send_error: None,
        last_send_attempt_date: None,
        send_date: None,
        subject: None,
        body: None,
        email_from: None,
        email_to: None,
        cc: None,
        bcc: None,
        sms_number: Some("+42".to_owned()),
        message: Some("Shipped".to_owned()),
        created_date: OffsetDateTime::UNIX_EPOCH,
        modified_date: None,
        created_by: None,
        modified_by: None,
    }
}

#[test]
fn message_status_is_parsed() {
    let msg = NotificationMessage::try_from(message_model("Sent")).unwrap();
    assert_eq!(msg.status, MessageStatus::Sent);
    assert_eq!(
        msg.content,
        MessageContent::Sms {
            number: Some("+42".to_owned()),
            message: Some("Shipped".to_owned()),
        }
    );

    let err = NotificationMessage::try_from(message_model("Queued")).unwrap_err();
    assert!(matches!(err, DomainError::InvalidValue { .. }));
}

#[test]
fn new_message_starts_pending() {
    let am = new_message_am(NewNotificationMessage {
        id: None,
        notification_id: "n1".to_owned(),
        notification_type: None,
        tenant_id: None,
        tenant_type: None,
        language_code: None,
        max_send_attempt_count: 3,
        content: MessageContent::Email {
            subject: Some("s".to_owned()),
            body: None,
            from: None,
            to: Some("a@example.com".to_owned()),
            cc: None,
            bcc: None,
        },
        created_by: None,
    });
    assert_eq!(am.status, ActiveValue::Set("Pending".to_owned()));
    assert_eq!(am.send_attempt_count, ActiveValue::Set(0));
    assert_eq!(
        am.discriminator,
        ActiveValue::Set(notification_message::EMAIL_DISCRIMINATOR.to_owned())
    );
}

#[test]
fn recipient_type_round_trips_through_storage_string() {
    let am = new_recipient_am(
        "n1",
        NewEmailRecipient {
            id: None,
            email_address: "boss@example.com".to_owned(),
            recipient_type: RecipientType::Bcc,
        },
    );
    assert_eq!(am.recipient_type, ActiveValue::Set("Bcc".to_owned()));

    let model = email_recipient::Model {
        id: "r1".to_owned(),
        notification_id: "n1".to_owned(),
        email_address: "boss@example.com".to_owned(),
        recipient_type: "Bcc".to_owned(),
    };
    let recipient = EmailRecipient::try_from(model.clone()).unwrap();
    assert_eq!(recipient.recipient_type, RecipientType::Bcc);

    let bad = email_recipient::Model {
        recipient_type: "To".to_owned(),
        ..model
    };
    assert!(EmailRecipient::try_from(bad).is_err());
}
