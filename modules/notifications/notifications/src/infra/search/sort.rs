use std::collections::HashMap;

use notifications_sdk::{SortDirection, SortInfo};
use sea_orm::sea_query::Order;
use sea_orm::{ColumnTrait, EntityTrait, QueryOrder, Select};

use crate::domain::error::DomainError;

/// Sortable API field names mapped to entity columns. Lookups ignore case.
#[derive(Clone)]
#[must_use]
pub struct SortMap<E: EntityTrait> {
    map: HashMap<String, E::Column>,
}

impl<E: EntityTrait> Default for SortMap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> SortMap<E> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn insert(mut self, api_name: impl Into<String>, col: E::Column) -> Self {
        self.map.insert(api_name.into().to_lowercase(), col);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<E::Column>
    where
        E::Column: Copy,
    {
        self.map.get(&name.to_lowercase()).copied()
    }
}

/// Apply a sort list to a query; the first key is the primary order.
pub trait SortExt<E: EntityTrait>: Sized {
    /// # Errors
    /// Returns `DomainError::InvalidCriteria` if a column is not in `map`.
    fn apply_sort(self, sort: &[SortInfo], map: &SortMap<E>) -> Result<Self, DomainError>;
}

impl<E> SortExt<E> for Select<E>
where
    E: EntityTrait,
    E::Column: ColumnTrait + Copy,
{
    fn apply_sort(self, sort: &[SortInfo], map: &SortMap<E>) -> Result<Self, DomainError> {
        let mut query = self;
        for key in sort {
            let col = map.get(&key.column).ok_or_else(|| {
                DomainError::invalid_criteria(format!("unknown sort column '{}'", key.column))
            })?;
            let order = match key.direction {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            };
            query = query.order_by(col, order);
        }
        Ok(query)
    }
}
