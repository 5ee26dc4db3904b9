use sea_orm::ConnectionTrait;
use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

pub const EMAIL_DISCRIMINATOR: &str = "EmailNotificationEntity";
pub const SMS_DISCRIMINATOR: &str = "SmsNotificationEntity";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub discriminator: String,
    pub notification_type: String,
    pub tenant_id: Option<String>,
    pub tenant_type: Option<String>,
    pub is_active: bool,
    // email
    pub email_from: Option<String>,
    pub email_to: Option<String>,
    // sms
    pub sms_number: Option<String>,
    pub created_date: OffsetDateTime,
    pub modified_date: Option<OffsetDateTime>,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::notification_template::Entity")]
    Templates,
    #[sea_orm(has_many = "super::email_attachment::Entity")]
    Attachments,
    #[sea_orm(has_many = "super::email_recipient::Entity")]
    Recipients,
    #[sea_orm(has_many = "super::notification_message::Entity")]
    Messages,
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

impl Related<super::notification_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Templates.def()
    }
}

impl Related<super::email_attachment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attachments.def()
    }
}

impl Related<super::email_recipient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipients.def()
    }
}

impl Related<super::notification_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
    }
}
