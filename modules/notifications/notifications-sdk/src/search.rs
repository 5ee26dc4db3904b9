//! Search criteria, sort specification and result page types.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// One sort key. The first key in a list is the primary order, the
/// following ones break ties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortInfo {
    pub column: String,
    pub direction: SortDirection,
}

impl SortInfo {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Parse a textual sort expression such as `"name:desc;id"`.
    ///
    /// Items are separated by `;`, column and direction by `:`. A direction
    /// of `desc` or `descending` (any case) sorts descending, anything else
    /// ascending. Blank items are skipped.
    #[must_use]
    pub fn parse(expr: &str) -> Vec<SortInfo> {
        expr.split(';')
            .filter_map(|item| {
                let mut parts = item.splitn(2, ':');
                let column = parts.next().map(str::trim).filter(|c| !c.is_empty())?;
                let direction = match parts.next().map(str::trim) {
                    Some(d) if d.eq_ignore_ascii_case("desc") || d.eq_ignore_ascii_case("descending") => {
                        SortDirection::Desc
                    }
                    _ => SortDirection::Asc,
                };
                Some(SortInfo {
                    column: column.to_owned(),
                    direction,
                })
            })
            .collect()
    }
}

impl fmt::Display for SortInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Asc => write!(f, "{}:asc", self.column),
            SortDirection::Desc => write!(f, "{}:desc", self.column),
        }
    }
}

/// Paging parameters shared by every search criteria type.
///
/// `take == None` uses the configured default page size, `Some(0)` only
/// counts matching rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Paging {
    pub skip: u64,
    pub take: Option<u64>,
}

/// Criteria for searching notification layouts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationLayoutSearchCriteria {
    /// Restrict results to these identifiers; empty means no identity filter.
    pub object_ids: Vec<String>,
    /// Empty means `name` ascending.
    pub sort_infos: Vec<SortInfo>,
    pub paging: Paging,
}

impl NotificationLayoutSearchCriteria {
    #[must_use]
    pub fn with_object_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.object_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, expr: &str) -> Self {
        self.sort_infos = SortInfo::parse(expr);
        self
    }

    #[must_use]
    pub fn with_paging(mut self, skip: u64, take: u64) -> Self {
        self.paging = Paging {
            skip,
            take: Some(take),
        };
        self
    }
}

/// Criteria for searching notification definitions. All filters are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationSearchCriteria {
    pub object_ids: Vec<String>,
    pub notification_type: Option<String>,
    pub tenant_id: Option<String>,
    pub tenant_type: Option<String>,
    pub is_active: Option<bool>,
    /// Empty means `notification_type` ascending.
    pub sort_infos: Vec<SortInfo>,
    pub paging: Paging,
}

impl NotificationSearchCriteria {
    #[must_use]
    pub fn for_tenant(tenant_id: impl Into<String>, tenant_type: impl Into<String>) -> Self {
        Self {
            tenant_id: Some(tenant_id.into()),
            tenant_type: Some(tenant_type.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, notification_type: impl Into<String>) -> Self {
        self.notification_type = Some(notification_type.into());
        self
    }

    #[must_use]
    pub fn with_sort(mut self, expr: &str) -> Self {
        self.sort_infos = SortInfo::parse(expr);
        self
    }
}

/// One page of search results plus the number of rows matching the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<T> {
    pub total_count: u64,
    pub results: Vec<T>,
}

impl<T> Default for SearchResult<T> {
    fn default() -> Self {
        Self {
            total_count: 0,
            results: Vec::new(),
        }
    }
}
