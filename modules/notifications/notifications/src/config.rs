//! Configuration for the notifications module.

use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::infra::storage::provider::DbProvider;

/// Prefix for environment overrides, e.g. `NOTIFICATIONS__SEARCH__MAX_PAGE_SIZE=50`.
pub const ENV_PREFIX: &str = "NOTIFICATIONS__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load notifications config: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid notifications config: {0}")]
    Invalid(String),
}

/// Notifications module configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationsConfig {
    /// Relational engine the schema is generated for. Must match `url`.
    pub provider: DbProvider,

    /// Connection string, e.g. `sqlite::memory:` or `postgres://user@host/db`.
    pub url: String,

    /// Pool size; the driver default applies when unset.
    pub max_connections: Option<u32>,

    pub search: SearchConfig,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            provider: DbProvider::Sqlite,
            url: "sqlite::memory:".to_owned(),
            max_connections: None,
            search: SearchConfig::default(),
        }
    }
}

/// Paging limits and read-through cache settings shared by all searches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Page size used when the criteria leave `take` unset.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,

    /// Upper bound applied to any requested `take`.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,

    /// Time-to-live for cached search results.
    #[serde(default = "default_cache_ttl", with = "humantime_serde")]
    pub cache_ttl: Duration,

    /// Maximum number of cached result pages per entity. `0` disables caching.
    #[serde(default = "default_cache_max_entries")]
    pub cache_max_entries: u64,
}

fn default_page_size() -> u64 {
    20
}

fn default_max_page_size() -> u64 {
    1000
}

fn default_cache_ttl() -> Duration {
    Duration::from_secs(60)
}

fn default_cache_max_entries() -> u64 {
    1000
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            cache_ttl: default_cache_ttl(),
            cache_max_entries: default_cache_max_entries(),
        }
    }
}

impl NotificationsConfig {
    /// Load configuration from defaults, an optional YAML file and
    /// `NOTIFICATIONS__*` environment variables, in increasing precedence.
    ///
    /// # Errors
    /// Returns `ConfigError` when a source cannot be parsed or the merged
    /// values are inconsistent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let cfg: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    /// Returns `ConfigError::Invalid` when paging limits contradict each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::Invalid("url must not be empty".to_owned()));
        }
        if self.search.max_page_size == 0 {
            return Err(ConfigError::Invalid(
                "search.max_page_size must be greater than zero".to_owned(),
            ));
        }
        if self.search.default_page_size > self.search.max_page_size {
            return Err(ConfigError::Invalid(format!(
                "search.default_page_size ({}) exceeds search.max_page_size ({})",
                self.search.default_page_size, self.search.max_page_size
            )));
        }
        Ok(())
    }
}
