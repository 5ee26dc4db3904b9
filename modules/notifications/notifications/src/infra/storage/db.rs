//! Connection setup and `DbErr` classification.

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, SqlErr};
use tracing::info;

use crate::config::NotificationsConfig;
use crate::domain::error::DomainError;

/// Map a `SeaORM` error to a domain error, classifying constraint violations
/// reported by the store.
pub(crate) fn db_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => DomainError::conflict(message),
        Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
            DomainError::reference_violation(message)
        }
        _ => DomainError::database(e.to_string()),
    }
}

/// Open a pooled connection for the configured provider.
///
/// # Errors
/// Returns `DbErr` if the connection cannot be established or the URL points
/// at a different engine than the configured provider.
pub async fn connect(cfg: &NotificationsConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.sqlx_logging(false)
        .acquire_timeout(Duration::from_secs(30));
    if let Some(max) = cfg.max_connections {
        opts.max_connections(max);
    }

    let db = Database::connect(opts).await?;
    let backend = db.get_database_backend();
    if backend != cfg.provider.backend() {
        return Err(DbErr::Custom(format!(
            "configured provider '{}' does not match connection backend {backend:?}",
            cfg.provider
        )));
    }
    info!(provider = %cfg.provider, "Connected to notifications database");
    Ok(db)
}
