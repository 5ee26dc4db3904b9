use notifications_sdk::{
    NewNotificationLayout, NotificationLayout, NotificationLayoutSearchCriteria, SearchResult,
    SortInfo,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::{debug, info, instrument};

use super::{
    AUDIT_USER_MAX_LEN, ID_MAX_LEN, NAME_MAX_LEN, validate_opt_len, validate_required,
};
use crate::config::SearchConfig;
use crate::domain::error::DomainError;
use crate::infra::search::{SearchPager, SortMap};
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::notification_layout::{Column, Entity};
use crate::infra::storage::mapper;

pub struct LayoutService {
    pager: SearchPager<Entity, NotificationLayout>,
}

impl LayoutService {
    #[must_use]
    pub fn new(db: DatabaseConnection, cfg: &SearchConfig) -> Self {
        let sort_map = SortMap::new()
            .insert("id", Column::Id)
            .insert("name", Column::Name)
            .insert("created_date", Column::CreatedDate)
            .insert("modified_date", Column::ModifiedDate);
        Self {
            pager: SearchPager::new(db, sort_map, vec![SortInfo::asc("name")], cfg),
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.pager.db()
    }

    #[instrument(skip_all, fields(ids = criteria.object_ids.len(), sort = criteria.sort_infos.len()))]
    pub async fn search(
        &self,
        criteria: &NotificationLayoutSearchCriteria,
    ) -> Result<SearchResult<NotificationLayout>, DomainError> {
        let ids = criteria.object_ids.clone();
        self.pager
            .search(
                criteria,
                &criteria.sort_infos,
                criteria.paging,
                |query| {
                    if ids.is_empty() {
                        query
                    } else {
                        query.filter(Column::Id.is_in(ids))
                    }
                },
                |m| Ok(m.into()),
            )
            .await
    }

    /// Layouts with the given ids, ordered by name. Unknown ids are skipped.
    #[instrument(skip_all, fields(ids = ids.len()))]
    pub async fn get_by_ids(&self, ids: &[String]) -> Result<Vec<NotificationLayout>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = Entity::find()
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .order_by_asc(Column::Name)
            .all(self.db())
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip_all, fields(name = %layout.name))]
    pub async fn create(&self, layout: NewNotificationLayout) -> Result<NotificationLayout, DomainError> {
        validate_required("name", &layout.name, NAME_MAX_LEN)?;
        validate_opt_len("id", layout.id.as_deref(), ID_MAX_LEN)?;
        validate_opt_len("created_by", layout.created_by.as_deref(), AUDIT_USER_MAX_LEN)?;

        let model = mapper::new_layout_am(layout)
            .insert(self.db())
            .await
            .map_err(db_err)?;
        self.pager.invalidate();
        info!(id = %model.id, "Created notification layout");
        Ok(model.into())
    }

    #[instrument(skip_all, fields(id = %layout.id))]
    pub async fn update(&self, layout: NotificationLayout) -> Result<NotificationLayout, DomainError> {
        validate_required("name", &layout.name, NAME_MAX_LEN)?;
        validate_opt_len(
            "modified_by",
            layout.audit.modified_by.as_deref(),
            AUDIT_USER_MAX_LEN,
        )?;

        let id = layout.id.clone();
        let model = mapper::layout_update_am(layout)
            .update(self.db())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => DomainError::not_found("NotificationLayout", id),
                other => db_err(other),
            })?;
        self.pager.invalidate();
        Ok(model.into())
    }

    /// Delete layouts. Email templates referencing them keep existing with
    /// their layout reference cleared by the store.
    #[instrument(skip_all, fields(ids = ids.len()))]
    pub async fn delete(&self, ids: &[String]) -> Result<(), DomainError> {
        if ids.is_empty() {
            return Ok(());
        }
        let res = Entity::delete_many()
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .exec(self.db())
            .await
            .map_err(db_err)?;
        self.pager.invalidate();
        debug!(deleted = res.rows_affected, "Deleted notification layouts");
        Ok(())
    }
}
