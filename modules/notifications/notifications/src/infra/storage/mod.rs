//! Relational storage: entities, schema migrations, provider profiles and
//! the model mapping layer.

pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod provider;
