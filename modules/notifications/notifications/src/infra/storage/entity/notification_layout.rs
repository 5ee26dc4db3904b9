use sea_orm::ConnectionTrait;
use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification_layout")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub template: Option<String>,
    pub created_date: OffsetDateTime,
    pub modified_date: Option<OffsetDateTime>,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::notification_template::Entity")]
    Templates,
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
