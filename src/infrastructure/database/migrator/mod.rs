//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20251116_000001_create_contact_persons;
mod m20251116_000002_create_customers;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251116_000001_create_contact_persons::Migration),
            Box::new(m20251116_000002_create_customers::Migration),
        ]
    }
}
