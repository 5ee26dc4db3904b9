use std::marker::PhantomData;

use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;

use crate::infra::storage::provider::{
    DbProvider, MySqlProfile, PostgresProfile, ProviderProfile, SqliteProfile,
};

mod initial_001;

/// Migrator parameterized by the provider profile whose column types it emits.
pub struct Migrator<P>(PhantomData<fn() -> P>);

#[async_trait::async_trait]
impl<P: ProviderProfile> MigratorTrait for Migrator<P> {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(initial_001::Migration::<P>::new())]
    }
}

/// Apply pending migrations using the profile of the configured provider.
///
/// # Errors
/// Returns `DbErr` if the connection backend does not match `provider` or a
/// migration statement fails.
pub async fn run_migrations(db: &DatabaseConnection, provider: DbProvider) -> Result<(), DbErr> {
    match provider {
        DbProvider::Sqlite => Migrator::<SqliteProfile>::up(db, None).await,
        DbProvider::Postgres => Migrator::<PostgresProfile>::up(db, None).await,
        DbProvider::MySql => Migrator::<MySqlProfile>::up(db, None).await,
    }
}
