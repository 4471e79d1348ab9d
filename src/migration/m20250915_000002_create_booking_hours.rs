//! Migration: Create booking_hours table.
//!
//! A booking hour is a reserved time window on a court. Rows are removed
//! when their court is deleted (cascade).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE booking_hours (
                    id SERIAL PRIMARY KEY,
                    court_id INTEGER NOT NULL REFERENCES courts(id) ON DELETE CASCADE,
                    date_start TIMESTAMPTZ NOT NULL,
                    date_end TIMESTAMPTZ NOT NULL,
                    status VARCHAR(20) NOT NULL DEFAULT 'active',
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                -- Index for the per-court listing, newest first
                CREATE INDEX idx_booking_hours_court_date
                    ON booking_hours(court_id, date_start DESC);

                CREATE TRIGGER update_booking_hours_updated_at
                    BEFORE UPDATE ON booking_hours
                    FOR EACH ROW
                    EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_booking_hours_updated_at ON booking_hours;
                DROP TABLE IF EXISTS booking_hours CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
