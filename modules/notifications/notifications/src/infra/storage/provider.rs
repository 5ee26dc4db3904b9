//! Relational provider selection.
//!
//! The provider is chosen explicitly in configuration. Each provider has a
//! [`ProviderProfile`] that supplies the native column types the schema
//! needs where engines disagree on the mapping of a logical column.

use std::fmt;
use std::str::FromStr;

use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::{Alias, ColumnDef};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported database provider '{0}' (expected one of: sqlite, postgres, mysql)")]
pub struct UnsupportedProvider(pub String);

/// Supported relational engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DbProvider {
    Sqlite,
    Postgres,
    MySql,
}

impl DbProvider {
    #[must_use]
    pub fn backend(self) -> DatabaseBackend {
        match self {
            Self::Sqlite => DatabaseBackend::Sqlite,
            Self::Postgres => DatabaseBackend::Postgres,
            Self::MySql => DatabaseBackend::MySql,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
        }
    }
}

impl fmt::Display for DbProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbProvider {
    type Err = UnsupportedProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::MySql),
            _ => Err(UnsupportedProvider(s.to_owned())),
        }
    }
}

impl TryFrom<String> for DbProvider {
    type Error = UnsupportedProvider;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Provider-specific column type overrides applied while building the schema.
pub trait ProviderProfile: Send + Sync + 'static {
    const PROVIDER: DbProvider;

    /// Unbounded text such as template bodies.
    fn large_text(col: &mut ColumnDef) -> &mut ColumnDef;

    /// Timestamp with offset, keeping sub-second precision.
    fn timestamp(col: &mut ColumnDef) -> &mut ColumnDef;
}

pub struct SqliteProfile;

impl ProviderProfile for SqliteProfile {
    const PROVIDER: DbProvider = DbProvider::Sqlite;

    fn large_text(col: &mut ColumnDef) -> &mut ColumnDef {
        col.text()
    }

    fn timestamp(col: &mut ColumnDef) -> &mut ColumnDef {
        col.timestamp_with_time_zone()
    }
}

pub struct PostgresProfile;

impl ProviderProfile for PostgresProfile {
    const PROVIDER: DbProvider = DbProvider::Postgres;

    fn large_text(col: &mut ColumnDef) -> &mut ColumnDef {
        col.text()
    }

    fn timestamp(col: &mut ColumnDef) -> &mut ColumnDef {
        col.timestamp_with_time_zone()
    }
}

pub struct MySqlProfile;

impl ProviderProfile for MySqlProfile {
    const PROVIDER: DbProvider = DbProvider::MySql;

    // TEXT caps at 64KiB on MySQL.
    fn large_text(col: &mut ColumnDef) -> &mut ColumnDef {
        col.custom(Alias::new("LONGTEXT"))
    }

    // Plain TIMESTAMP truncates to whole seconds.
    fn timestamp(col: &mut ColumnDef) -> &mut ColumnDef {
        col.custom(Alias::new("TIMESTAMP(6)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_providers_and_aliases() {
        assert_eq!("sqlite".parse::<DbProvider>(), Ok(DbProvider::Sqlite));
        assert_eq!("PostgreSQL".parse::<DbProvider>(), Ok(DbProvider::Postgres));
        assert_eq!(" pg ".parse::<DbProvider>(), Ok(DbProvider::Postgres));
        assert_eq!("MariaDB".parse::<DbProvider>(), Ok(DbProvider::MySql));
    }

    #[test]
    fn unknown_provider_is_an_error() {
        let err = "oracle".parse::<DbProvider>().unwrap_err();
        assert_eq!(err, UnsupportedProvider("oracle".to_owned()));
        assert!(err.to_string().contains("oracle"));
    }

    #[test]
    fn provider_maps_to_backend() {
        assert_eq!(DbProvider::Sqlite.backend(), DatabaseBackend::Sqlite);
        assert_eq!(DbProvider::Postgres.backend(), DatabaseBackend::Postgres);
        assert_eq!(DbProvider::MySql.backend(), DatabaseBackend::MySql);
        assert_eq!(SqliteProfile::PROVIDER, DbProvider::Sqlite);
        assert_eq!(PostgresProfile::PROVIDER, DbProvider::Postgres);
        assert_eq!(MySqlProfile::PROVIDER, DbProvider::MySql);
    }
}
