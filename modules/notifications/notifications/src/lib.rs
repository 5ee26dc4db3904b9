//! Notifications persistence module.
//!
//! Maps notifications, templates, messages, attachments, recipients and
//! layouts onto a relational store and exposes cached, paged searches over
//! them through `notifications_sdk::NotificationsApi`.

pub mod config;
pub mod domain;
pub mod infra;
pub mod module;

#[cfg(test)]
mod config_tests;

pub use config::{DbProvider, NotificationsConfig, SearchConfig};
pub use domain::local_client::LocalClient;
pub use module::NotificationsModule;
