//! Composition root for the notifications module.

use std::sync::Arc;

use anyhow::Context;
use notifications_sdk::NotificationsApi;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::NotificationsConfig;
use crate::domain::local_client::LocalClient;
use crate::domain::service::{LayoutService, MessageService, NotificationService};
use crate::infra::storage::{db, migrations};

/// Wired notifications module: connection, migrated schema and services.
pub struct NotificationsModule {
    db: DatabaseConnection,
    client: Arc<LocalClient>,
}

impl NotificationsModule {
    /// Connect to the configured store, apply migrations and build the services.
    ///
    /// # Errors
    /// Fails if the configuration is invalid, the connection cannot be
    /// established or migrations do not apply.
    pub async fn init(cfg: &NotificationsConfig) -> anyhow::Result<Self> {
        info!(provider = %cfg.provider, "Initializing notifications module");
        cfg.validate()?;

        let db = db::connect(cfg)
            .await
            .with_context(|| format!("connecting to {} notifications store", cfg.provider))?;
        Self::with_connection(db, cfg).await
    }

    /// Build the module over an existing connection.
    ///
    /// # Errors
    /// Fails if migrations do not apply to `db`.
    pub async fn with_connection(db: DatabaseConnection, cfg: &NotificationsConfig) -> anyhow::Result<Self> {
        migrations::run_migrations(&db, cfg.provider)
            .await
            .context("applying notifications migrations")?;
        info!("Notifications schema is up to date");

        let layouts = Arc::new(LayoutService::new(db.clone(), &cfg.search));
        let notifications = Arc::new(NotificationService::new(db.clone(), &cfg.search));
        let messages = Arc::new(MessageService::new(db.clone()));
        let client = Arc::new(LocalClient::new(layouts, notifications, messages));

        info!(
            default_page_size = cfg.search.default_page_size,
            max_page_size = cfg.search.max_page_size,
            cache_ttl_secs = cfg.search.cache_ttl.as_secs(),
            "Notifications module initialized"
        );
        Ok(Self { db, client })
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn NotificationsApi> {
        self.client.clone()
    }

    #[must_use]
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
