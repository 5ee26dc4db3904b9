use sea_orm::ConnectionTrait;
use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

pub const EMAIL_DISCRIMINATOR: &str = "EmailNotificationMessageEntity";
pub const SMS_DISCRIMINATOR: &str = "SmsNotificationMessageEntity";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification_message")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub discriminator: String,
    pub notification_id: String,
    pub notification_type: Option<String>,
    pub tenant_id: Option<String>,
    pub tenant_type: Option<String>,
    pub language_code: Option<String>,
    pub status: String,
    pub send_attempt_count: i32,
    pub max_send_attempt_count: i32,
    pub last_send_error: Option<String>,
    pub last_send_attempt_date: Option<OffsetDateTime>,
    pub send_date: Option<OffsetDateTime>,
    // email
    pub subject: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub body: Option<String>,
    pub email_from: Option<String>,
    pub email_to: Option<String>,
    pub cc: Option<String>,
    pub bcc: Option<String>,
    // sms
    pub sms_number: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub created_date: OffsetDateTime,
    pub modified_date: Option<OffsetDateTime>,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::notification::Entity",
        from = "Column::NotificationId",
        to = "super::notification::Column::Id",
        on_delete = "Restrict"
    )]
    Notification,
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            super::assign_id(&mut self.id);
        }
        super::stamp_audit(&mut self.created_date, &mut self.modified_date, insert);
        Ok(self)
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}
