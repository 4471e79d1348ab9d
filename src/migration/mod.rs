//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20250915_000001_create_courts;
mod m20250915_000002_create_booking_hours;
mod m20250915_000003_create_clips;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250915_000001_create_courts::Migration),
            Box::new(m20250915_000002_create_booking_hours::Migration),
            Box::new(m20250915_000003_create_clips::Migration),
        ]
    }
}
