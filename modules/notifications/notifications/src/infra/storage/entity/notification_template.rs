use sea_orm::ConnectionTrait;
use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

pub const EMAIL_DISCRIMINATOR: &str = "EmailNotificationTemplateEntity";
pub const SMS_DISCRIMINATOR: &str = "SmsNotificationTemplateEntity";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification_template")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub discriminator: String,
    pub notification_id: String,
    pub language_code: Option<String>,
    // email
    pub subject: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub body: Option<String>,
    pub notification_layout_id: Option<String>,
    // sms
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
        on_delete = "Cascade"
    )]
    Notification,
    #[sea_orm(
        belongs_to = "super::notification_layout::Entity",
        from = "Column::NotificationLayoutId",
        to = "super::notification_layout::Column::Id",
        on_delete = "SetNull"
    )]
    NotificationLayout,
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

impl Related<super::notification_layout::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NotificationLayout.def()
    }
}
