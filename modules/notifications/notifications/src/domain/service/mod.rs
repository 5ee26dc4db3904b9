mod layouts;
mod messages;
mod notifications;

pub use layouts::LayoutService;
pub use messages::MessageService;
pub use notifications::NotificationService;

use notifications_sdk::{MessageContent, TemplateContent};

use super::error::DomainError;

/// Identifiers are stored in 128-character columns.
pub(crate) const ID_MAX_LEN: usize = 128;
/// `created_by` / `modified_by` columns.
pub(crate) const AUDIT_USER_MAX_LEN: usize = 64;
/// Short descriptive columns: names, types, tenants, addresses.
pub(crate) const NAME_MAX_LEN: usize = 128;
pub(crate) const LANGUAGE_CODE_MAX_LEN: usize = 16;
pub(crate) const SUBJECT_MAX_LEN: usize = 512;
/// `cc` / `bcc` address lists.
pub(crate) const ADDRESS_LIST_MAX_LEN: usize = 1024;

pub(crate) fn validate_len(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::validation(
            field,
            format!("exceeds maximum length of {max}"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_opt_len(
    field: &str,
    value: Option<&str>,
    max: usize,
) -> Result<(), DomainError> {
    value.map_or(Ok(()), |v| validate_len(field, v, max))
}

pub(crate) fn validate_required(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    validate_len(field, value, max)
}

pub(crate) fn validate_template_content(content: &TemplateContent) -> Result<(), DomainError> {
    match content {
        TemplateContent::Email {
            subject, layout_id, ..
        } => {
            validate_opt_len("subject", subject.as_deref(), SUBJECT_MAX_LEN)?;
            validate_opt_len("layout_id", layout_id.as_deref(), ID_MAX_LEN)
        }
        TemplateContent::Sms { .. } => Ok(()),
    }
}

pub(crate) fn validate_message_content(content: &MessageContent) -> Result<(), DomainError> {
    match content {
        MessageContent::Email {
            subject,
            from,
            to,
            cc,
            bcc,
            ..
        } => {
            validate_opt_len("subject", subject.as_deref(), SUBJECT_MAX_LEN)?;
            validate_opt_len("from", from.as_deref(), NAME_MAX_LEN)?;
            validate_opt_len("to", to.as_deref(), NAME_MAX_LEN)?;
            validate_opt_len("cc", cc.as_deref(), ADDRESS_LIST_MAX_LEN)?;
            validate_opt_len("bcc", bcc.as_deref(), ADDRESS_LIST_MAX_LEN)
        }
        MessageContent::Sms { number, .. } => {
            validate_opt_len("number", number.as_deref(), NAME_MAX_LEN)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_counted_in_characters() {
        assert!(validate_len("name", &"\u{e9}".repeat(128), NAME_MAX_LEN).is_ok());
        assert!(validate_len("name", &"a".repeat(129), NAME_MAX_LEN).is_err());
    }

    #[test]
    fn required_rejects_blank() {
        let err = validate_required("name", "   ", NAME_MAX_LEN).unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(validate_opt_len("created_by", None, AUDIT_USER_MAX_LEN).is_ok());
        assert!(validate_opt_len("created_by", Some(&"x".repeat(65)), AUDIT_USER_MAX_LEN).is_err());
    }

    #[test]
    fn template_content_checks_subject_and_layout_reference() {
        let email = |subject: usize, layout: usize| TemplateContent::Email {
            subject: Some("s".repeat(subject)),
            body: None,
            layout_id: Some("l".repeat(layout)),
        };
        assert!(validate_template_content(&email(512, 128)).is_ok());
        assert!(matches!(
            validate_template_content(&email(513, 1)),
            Err(DomainError::Validation { ref field, .. }) if field == "subject"
        ));
        assert!(matches!(
            validate_template_content(&email(1, 129)),
            Err(DomainError::Validation { ref field, .. }) if field == "layout_id"
        ));
    }

    #[test]
    fn message_content_checks_addresses() {
        let email = |from: usize, bcc: usize| MessageContent::Email {
            subject: None,
            body: None,
            from: Some("f".repeat(from)),
            to: None,
            cc: None,
            bcc: Some("b".repeat(bcc)),
        };
        assert!(validate_message_content(&email(128, 1024)).is_ok());
        assert!(matches!(
            validate_message_content(&email(500, 1)),
            Err(DomainError::Validation { ref field, .. }) if field == "from"
        ));
        assert!(matches!(
            validate_message_content(&email(1, 1025)),
            Err(DomainError::Validation { ref field, .. }) if field == "bcc"
        ));
        let sms = MessageContent::Sms {
            number: Some("9".repeat(129)),
            message: Some("m".repeat(4000)),
        };
        assert!(validate_message_content(&sms).is_err());
    }
}
