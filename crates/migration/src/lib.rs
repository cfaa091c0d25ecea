//! Migrator registering the create-table migrations for the three resources.
//! Every migration is `if_not_exists`, so running the migrator at startup
//! doubles as auto-creation of absent tables.
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_users;
mod m20220101_000002_create_products;
mod m20220101_000003_create_feedback;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_users::Migration),
            Box::new(m20220101_000002_create_products::Migration),
            Box::new(m20220101_000003_create_feedback::Migration),
        ]
    }
}
