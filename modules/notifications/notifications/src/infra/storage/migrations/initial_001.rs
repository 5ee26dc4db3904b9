use std::marker::PhantomData;

use sea_orm_migration::prelude::*;

use crate::infra::storage::provider::ProviderProfile;

pub struct Migration<P>(PhantomData<fn() -> P>);

impl<P> Migration<P> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<P> MigrationName for Migration<P> {
    fn name(&self) -> &str {
        "m001_notifications_initial"
    }
}

#[async_trait::async_trait]
impl<P: ProviderProfile> MigrationTrait for Migration<P> {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        if backend != P::PROVIDER.backend() {
            return Err(DbErr::Migration(format!(
                "configured provider '{}' does not match connection backend {backend:?}",
                P::PROVIDER
            )));
        }

        manager
            .create_table(
                with_audit::<P>(
                    Table::create()
                        .table(NotificationLayout::Table)
                        .if_not_exists()
                        .col(id_col(NotificationLayout::Id))
                        .col(ColumnDef::new(NotificationLayout::Name).string_len(128).not_null())
                        .col(P::large_text(&mut ColumnDef::new(NotificationLayout::Template))),
                )
                .to_owned(),
            )
            .await?;

        manager
            .create_table(
                with_audit::<P>(
                    Table::create()
                        .table(Notification::Table)
                        .if_not_exists()
                        .col(id_col(Notification::Id))
                        .col(discriminator_col(Notification::Discriminator))
                        .col(ColumnDef::new(Notification::NotificationType).string_len(128).not_null())
                        .col(ColumnDef::new(Notification::TenantId).string_len(128))
                        .col(ColumnDef::new(Notification::TenantType).string_len(128))
                        .col(
                            ColumnDef::new(Notification::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(Notification::EmailFrom).string_len(128))
                        .col(ColumnDef::new(Notification::EmailTo).string_len(128))
                        .col(ColumnDef::new(Notification::SmsNumber).string_len(128)),
                )
                .to_owned(),
            )
            .await?;

        manager
            .create_table(
                with_audit::<P>(
                    Table::create()
                        .table(NotificationTemplate::Table)
                        .if_not_exists()
                        .col(id_col(NotificationTemplate::Id))
                        .col(discriminator_col(NotificationTemplate::Discriminator))
                        .col(fk_col(NotificationTemplate::NotificationId))
                        .col(ColumnDef::new(NotificationTemplate::LanguageCode).string_len(16))
                        .col(ColumnDef::new(NotificationTemplate::Subject).string_len(512))
                        .col(P::large_text(&mut ColumnDef::new(NotificationTemplate::Body)))
                        .col(ColumnDef::new(NotificationTemplate::NotificationLayoutId).string_len(128))
                        .col(P::large_text(&mut ColumnDef::new(NotificationTemplate::Message)))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_notification_template_notification")
                                .from(NotificationTemplate::Table, NotificationTemplate::NotificationId)
                                .to(Notification::Table, Notification::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_notification_template_layout")
                                .from(
                                    NotificationTemplate::Table,
                                    NotificationTemplate::NotificationLayoutId,
                                )
                                .to(NotificationLayout::Table, NotificationLayout::Id)
                                .on_delete(ForeignKeyAction::SetNull),
                        ),
                )
                .to_owned(),
            )
            .await?;

        manager
            .create_table(
                with_audit::<P>(
                    Table::create()
                        .table(NotificationMessage::Table)
                        .if_not_exists()
                        .col(id_col(NotificationMessage::Id))
                        .col(discriminator_col(NotificationMessage::Discriminator))
                        .col(fk_col(NotificationMessage::NotificationId))
                        .col(ColumnDef::new(NotificationMessage::NotificationType).string_len(128))
                        .col(ColumnDef::new(NotificationMessage::TenantId).string_len(128))
                        .col(ColumnDef::new(NotificationMessage::TenantType).string_len(128))
                        .col(ColumnDef::new(NotificationMessage::LanguageCode).string_len(16))
                        .col(ColumnDef::new(NotificationMessage::Status).string_len(20).not_null())
                        .col(
                            ColumnDef::new(NotificationMessage::SendAttemptCount)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(NotificationMessage::MaxSendAttemptCount)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(NotificationMessage::LastSendError).string_len(1024))
                        .col(P::timestamp(&mut ColumnDef::new(
                            NotificationMessage::LastSendAttemptDate,
                        )))
                        .col(P::timestamp(&mut ColumnDef::new(NotificationMessage::SendDate)))
                        .col(ColumnDef::new(NotificationMessage::Subject).string_len(512))
                        .col(P::large_text(&mut ColumnDef::new(NotificationMessage::Body)))
                        .col(ColumnDef::new(NotificationMessage::EmailFrom).string_len(128))
                        .col(ColumnDef::new(NotificationMessage::EmailTo).string_len(128))
                        .col(ColumnDef::new(NotificationMessage::Cc).string_len(1024))
                        .col(ColumnDef::new(NotificationMessage::Bcc).string_len(1024))
                        .col(ColumnDef::new(NotificationMessage::SmsNumber).string_len(128))
                        .col(P::large_text(&mut ColumnDef::new(NotificationMessage::Message)))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_notification_message_notification")
                                .from(NotificationMessage::Table, NotificationMessage::NotificationId)
                                .to(Notification::Table, Notification::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        ),
                )
                .to_owned(),
            )
            .await?;

        manager
            .create_table(
                with_audit::<P>(
                    Table::create()
                        .table(NotificationEmailAttachment::Table)
                        .if_not_exists()
                        .col(id_col(NotificationEmailAttachment::Id))
                        .col(fk_col(NotificationEmailAttachment::NotificationId))
                        .col(
                            ColumnDef::new(NotificationEmailAttachment::FileName)
                                .string_len(512)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(NotificationEmailAttachment::Url)
                                .string_len(2048)
                                .not_null(),
                        )
                        .col(ColumnDef::new(NotificationEmailAttachment::MimeType).string_len(64))
                        .col(ColumnDef::new(NotificationEmailAttachment::Size).string_len(128))
                        .col(ColumnDef::new(NotificationEmailAttachment::LanguageCode).string_len(16))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_notification_email_attachment_notification")
                                .from(
                                    NotificationEmailAttachment::Table,
                                    NotificationEmailAttachment::NotificationId,
                                )
                                .to(Notification::Table, Notification::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        ),
                )
                .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NotificationEmailRecipient::Table)
                    .if_not_exists()
                    .col(id_col(NotificationEmailRecipient::Id))
                    .col(fk_col(NotificationEmailRecipient::NotificationId))
                    .col(
                        ColumnDef::new(NotificationEmailRecipient::EmailAddress)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NotificationEmailRecipient::RecipientType)
                            .string_len(8)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_email_recipient_notification")
                            .from(
                                NotificationEmailRecipient::Table,
                                NotificationEmailRecipient::NotificationId,
                            )
                            .to(Notification::Table, Notification::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_notification_type_tenant")
                    .table(Notification::Table)
                    .col(Notification::NotificationType)
                    .col(Notification::TenantId)
                    .col(Notification::TenantType)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_notification_layout_name")
                    .table(NotificationLayout::Table)
                    .col(NotificationLayout::Name)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_notification_template_notification")
                    .table(NotificationTemplate::Table)
                    .col(NotificationTemplate::NotificationId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_notification_message_notification")
                    .table(NotificationMessage::Table)
                    .col(NotificationMessage::NotificationId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_notification_email_attachment_notification")
                    .table(NotificationEmailAttachment::Table)
                    .col(NotificationEmailAttachment::NotificationId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_notification_email_recipient_notification")
                    .table(NotificationEmailRecipient::Table)
                    .col(NotificationEmailRecipient::NotificationId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationEmailRecipient::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NotificationEmailAttachment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NotificationMessage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NotificationTemplate::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NotificationLayout::Table).to_owned())
            .await
    }
}

fn id_col<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .string_len(128)
        .not_null()
        .primary_key()
        .to_owned()
}

fn fk_col<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name).string_len(128).not_null().to_owned()
}

fn discriminator_col<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name).string_len(128).not_null().to_owned()
}

fn with_audit<P: ProviderProfile>(table: &mut TableCreateStatement) -> &mut TableCreateStatement {
    table
        .col(P::timestamp(ColumnDef::new(Audit::CreatedDate).not_null()))
        .col(P::timestamp(&mut ColumnDef::new(Audit::ModifiedDate)))
        .col(ColumnDef::new(Audit::CreatedBy).string_len(64))
        .col(ColumnDef::new(Audit::ModifiedBy).string_len(64))
}

#[derive(DeriveIden)]
enum Audit {
    CreatedDate,
    ModifiedDate,
    CreatedBy,
    ModifiedBy,
}

#[derive(DeriveIden)]
enum NotificationLayout {
    Table,
    Id,
    Name,
    Template,
}

#[derive(DeriveIden)]
enum Notification {
    Table,
    Id,
    Discriminator,
    NotificationType,
    TenantId,
    TenantType,
    IsActive,
    EmailFrom,
    EmailTo,
    SmsNumber,
}

#[derive(DeriveIden)]
enum NotificationTemplate {
    Table,
    Id,
    Discriminator,
    NotificationId,
    LanguageCode,
    Subject,
    Body,
    NotificationLayoutId,
    Message,
}

#[derive(DeriveIden)]
enum NotificationMessage {
    Table,
    Id,
    Discriminator,
    NotificationId,
    NotificationType,
    TenantId,
    TenantType,
    LanguageCode,
    Status,
    SendAttemptCount,
    MaxSendAttemptCount,
    LastSendError,
    LastSendAttemptDate,
    SendDate,
    Subject,
    Body,
    EmailFrom,
    EmailTo,
    Cc,
    Bcc,
    SmsNumber,
    Message,
}

#[derive(DeriveIden)]
enum NotificationEmailAttachment {
    Table,
    Id,
    NotificationId,
    FileName,
    Url,
    MimeType,
    Size,
    LanguageCode,
}

#[derive(DeriveIden)]
enum NotificationEmailRecipient {
    Table,
    Id,
    NotificationId,
    EmailAddress,
    RecipientType,
}
