//! Generic paged search over one entity with a read-through result cache.
//!
//! A concrete search supplies the filters as a closure over the base
//! `Select`; the pager resolves the sort list, counts, pages, maps rows and
//! caches the resulting page under the JSON rendering of the criteria.

use std::sync::atomic::{AtomicU64, Ordering};

use moka::future::Cache;
use notifications_sdk::{Paging, SearchResult, SortInfo};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QuerySelect, Select,
};
use serde::Serialize;
use tracing::debug;

use super::sort::{SortExt, SortMap};
use crate::config::SearchConfig;
use crate::domain::error::DomainError;
use crate::infra::storage::db::db_err;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LimitCfg {
    pub default: u64,
    pub max: u64,
}

impl LimitCfg {
    /// Effective page size for a requested `take`.
    #[must_use]
    pub fn effective(self, take: Option<u64>) -> u64 {
        take.unwrap_or(self.default).min(self.max)
    }
}

pub struct SearchPager<E, D>
where
    E: EntityTrait,
    D: Clone + Send + Sync + 'static,
{
    db: DatabaseConnection,
    sort_map: SortMap<E>,
    default_sort: Vec<SortInfo>,
    limits: LimitCfg,
    cache: Option<Cache<String, SearchResult<D>>>,
    /// Bumped by `invalidate`; part of every cache key so a page read
    /// before a write can never be served after it.
    generation: AtomicU64,
}

impl<E, D> SearchPager<E, D>
where
    E: EntityTrait,
    E::Column: ColumnTrait + Copy,
    D: Clone + Send + Sync + 'static,
{
    pub fn new(
        db: DatabaseConnection,
        sort_map: SortMap<E>,
        default_sort: Vec<SortInfo>,
        cfg: &SearchConfig,
    ) -> Self {
        let cache = (cfg.cache_max_entries > 0).then(|| {
            Cache::builder()
                .max_capacity(cfg.cache_max_entries)
                .time_to_live(cfg.cache_ttl)
                .build()
        });
        Self {
            db,
            sort_map,
            default_sort,
            limits: LimitCfg {
                default: cfg.default_page_size,
                max: cfg.max_page_size,
            },
            cache,
            generation: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Run one search.
    ///
    /// `criteria` only feeds the cache key; `build` applies the filters and
    /// `map` converts each row. An empty `sort` uses the default sort.
    ///
    /// # Errors
    /// `InvalidCriteria` for unknown sort columns (raised before any query
    /// runs), mapping errors from `map`, or `Database` on query failure.
    pub async fn search<C, F, M>(
        &self,
        criteria: &C,
        sort: &[SortInfo],
        paging: Paging,
        build: F,
        map: M,
    ) -> Result<SearchResult<D>, DomainError>
    where
        C: Serialize,
        F: FnOnce(Select<E>) -> Select<E>,
        M: Fn(E::Model) -> Result<D, DomainError>,
        E::Model: Send + Sync,
    {
        let sort = if sort.is_empty() {
            self.default_sort.as_slice()
        } else {
            sort
        };
        let filtered = build(E::find());
        let sorted = filtered.clone().apply_sort(sort, &self.sort_map)?;

        let criteria = serde_json::to_string(criteria)
            .map_err(|e| DomainError::invalid_criteria(e.to_string()))?;
        let key = format!(
            "{}:{criteria}",
            self.generation.load(Ordering::Acquire)
        );
        if let Some(cache) = &self.cache
            && let Some(hit) = cache.get(&key).await
        {
            debug!(entity = E::default().table_name(), "search cache hit");
            return Ok(hit);
        }

        let total_count = filtered.count(&self.db).await.map_err(db_err)?;
        let take = self.limits.effective(paging.take);

        let results = if take == 0 || paging.skip >= total_count {
            Vec::new()
        } else {
            sorted
                .offset(paging.skip)
                .limit(take)
                .all(&self.db)
                .await
                .map_err(db_err)?
                .into_iter()
                .map(map)
                .collect::<Result<Vec<_>, _>>()?
        };
        debug!(
            entity = E::default().table_name(),
            total_count,
            returned = results.len(),
            "search executed"
        );

        let page = SearchResult {
            total_count,
            results,
        };
        if let Some(cache) = &self.cache {
            cache.insert(key, page.clone()).await;
        }
        Ok(page)
    }

    /// Drop every cached page. Called after writes to the entity.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DbProvider, NotificationsConfig};
    use crate::infra::storage::entity::notification_layout::{Column, Entity, Model};
    use crate::infra::storage::{db, mapper, migrations};
    use notifications_sdk::{NewNotificationLayout, NotificationLayout};
    use sea_orm::ActiveModelTrait;

    async fn layout_pager() -> SearchPager<Entity, NotificationLayout> {
        let cfg = NotificationsConfig {
            provider: DbProvider::Sqlite,
            url: "sqlite::memory:".to_owned(),
            max_connections: Some(1),
            search: SearchConfig::default(),
        };
        let conn = db::connect(&cfg).await.unwrap();
        migrations::run_migrations(&conn, cfg.provider).await.unwrap();
        let sort_map = SortMap::new().insert("name", Column::Name);
        SearchPager::new(conn, sort_map, vec![SortInfo::asc("name")], &cfg.search)
    }

    async fn insert_layout(pager: &SearchPager<Entity, NotificationLayout>, name: &str) {
        mapper::new_layout_am(NewNotificationLayout::named(name))
            .insert(pager.db())
            .await
            .unwrap();
    }

    async fn search_all(
        pager: &SearchPager<Entity, NotificationLayout>,
        on_row: impl Fn(),
    ) -> SearchResult<NotificationLayout> {
        pager
            .search(&"all", &[], Paging::default(), |q| q, |m: Model| {
                on_row();
                Ok(m.into())
            })
            .await
            .unwrap()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn write_during_search_is_not_hidden_by_cache() {
        let pager = layout_pager().await;
        insert_layout(&pager, "A").await;

        // Rows are already read when `map` runs; a write lands right here.
        let first = search_all(&pager, || {
            tokio::task::block_in_place(|| {
                tokio::runtime::Handle::current().block_on(async {
                    if Entity::find().count(pager.db()).await.unwrap() == 1 {
                        insert_layout(&pager, "B").await;
                        pager.invalidate();
                    }
                });
            });
        })
        .await;
        assert_eq!(first.total_count, 1);

        let second = search_all(&pager, || {}).await;
        assert_eq!(second.total_count, 2);
    }

    #[tokio::test]
    async fn repeated_search_is_served_from_cache_until_invalidated() {
        let pager = layout_pager().await;
        insert_layout(&pager, "A").await;
        assert_eq!(search_all(&pager, || {}).await.total_count, 1);

        insert_layout(&pager, "B").await;
        assert_eq!(search_all(&pager, || {}).await.total_count, 1, "cached page");

        pager.invalidate();
        assert_eq!(search_all(&pager, || {}).await.total_count, 2);
    }

    #[test]
    fn take_defaults_and_clamps() {
        let limits = LimitCfg {
            default: 20,
            max: 100,
        };
        assert_eq!(limits.effective(None), 20);
        assert_eq!(limits.effective(Some(5)), 5);
        assert_eq!(limits.effective(Some(0)), 0);
        assert_eq!(limits.effective(Some(5000)), 100);
    }
}
