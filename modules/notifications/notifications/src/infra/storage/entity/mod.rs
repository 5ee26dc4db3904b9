//! `SeaORM` entities for the notification tables.
//!
//! Notifications, templates and messages each live in one table shared by
//! their email and SMS variants; the `discriminator` column tells them apart
//! and the subtype columns of the other variant stay `NULL`.

use sea_orm::ActiveValue;
use time::OffsetDateTime;
use uuid::Uuid;

pub mod email_attachment;
pub mod email_recipient;
pub mod notification;
pub mod notification_layout;
pub mod notification_message;
pub mod notification_template;

/// Generate a string identifier when the caller did not supply one.
pub(crate) fn assign_id(id: &mut ActiveValue<String>) {
    let missing = match id {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => v.is_empty(),
        ActiveValue::NotSet => true,
    };
    if missing {
        *id = ActiveValue::Set(Uuid::new_v4().to_string());
    }
}

pub(crate) fn stamp_audit(
    created_date: &mut ActiveValue<OffsetDateTime>,
    modified_date: &mut ActiveValue<Option<OffsetDateTime>>,
    insert: bool,
) {
    let now = OffsetDateTime::now_utc();
    if insert && created_date.is_not_set() {
        *created_date = ActiveValue::Set(now);
    }
    *modified_date = ActiveValue::Set(Some(now));
}
