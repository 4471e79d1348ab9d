//! Migration: Create clips table.
//!
//! A clip is one uploaded video file plus its metadata, owned by exactly
//! one booking hour (cascade delete).

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
                CREATE TABLE clips (
                    id SERIAL PRIMARY KEY,
                    booking_hour_id INTEGER NOT NULL REFERENCES booking_hours(id) ON DELETE CASCADE,
                    filename VARCHAR(255) NOT NULL UNIQUE,
                    file_path TEXT NOT NULL,
                    file_size BIGINT,
                    mime_type VARCHAR(100),
                    duration_seconds INTEGER,
                    camera_name VARCHAR(255),
                    upload_status VARCHAR(20) NOT NULL DEFAULT 'uploaded',
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                -- Index for the per-booking listing, newest first
                CREATE INDEX idx_clips_booking_hour_created
                    ON clips(booking_hour_id, created_at DESC);

                CREATE TRIGGER update_clips_updated_at
                    BEFORE UPDATE ON clips
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
                DROP TRIGGER IF EXISTS update_clips_updated_at ON clips;
                DROP TABLE IF EXISTS clips CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
