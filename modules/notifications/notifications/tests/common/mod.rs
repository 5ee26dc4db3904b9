#![allow(dead_code)]

use std::sync::Arc;

use notifications::{DbProvider, NotificationsConfig, NotificationsModule, SearchConfig};
use notifications_sdk::{NewNotificationLayout, NotificationLayout, NotificationsApi};

pub fn sqlite_config() -> NotificationsConfig {
    NotificationsConfig {
        provider: DbProvider::Sqlite,
        url: "sqlite::memory:".to_owned(),
        // One connection keeps the in-memory database alive and shared.
        max_connections: Some(1),
        search: SearchConfig::default(),
    }
}

pub async fn setup_with(search: SearchConfig) -> (NotificationsModule, Arc<dyn NotificationsApi>) {
    let cfg = NotificationsConfig {
        search,
        ..sqlite_config()
    };
    let module = NotificationsModule::init(&cfg).await.unwrap();
    let api = module.client();
    (module, api)
}

pub async fn setup() -> Arc<dyn NotificationsApi> {
    setup_with(SearchConfig::default()).await.1
}

pub async fn create_layouts(api: &Arc<dyn NotificationsApi>, names: &[&str]) -> Vec<NotificationLayout> {
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let mut layout = NewNotificationLayout::named(*name);
        layout.template = Some(format!("<html>{name}{{{{content}}}}</html>"));
        out.push(api.create_layout(layout).await.unwrap());
    }
    out
}

pub fn names(layouts: &[NotificationLayout]) -> Vec<&str> {
    layouts.iter().map(|l| l.name.as_str()).collect()
}
