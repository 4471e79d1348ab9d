//! Database queries for clips.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entity::clip::{self, ActiveModel, Entity as Clip};
use crate::error::{AppError, AppResult};

use super::DbPool;

/// Clip metadata to insert after the file has been written to disk.
#[derive(Debug, Clone)]
pub struct NewClip {
    pub booking_hour_id: i32,
    pub filename: String,
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: String,
    pub camera_name: Option<String>,
}

impl DbPool {
    /// List clips, newest first, optionally filtered by booking hour.
    pub async fn list_clips(
        &self,
        booking_hour_id: Option<i32>,
    ) -> AppResult<Vec<clip::Model>> {
        let mut select = Clip::find();

        if let Some(booking_hour_id) = booking_hour_id {
            select = select.filter(clip::Column::BookingHourId.eq(booking_hour_id));
        }

        select
            .order_by_desc(clip::Column::CreatedAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list clips: {}", e)))
    }

    /// Insert clip metadata. If this fails after the file write, the file
    /// stays on disk with no row (accepted orphan, not reconciled here).
    pub async fn insert_clip(&self, clip: NewClip) -> AppResult<clip::Model> {
        let now = Utc::now();

        let model = ActiveModel {
            booking_hour_id: Set(clip.booking_hour_id),
            filename: Set(clip.filename),
            file_path: Set(clip.file_path),
            file_size: Set(Some(clip.file_size)),
            mime_type: Set(Some(clip.mime_type)),
            duration_seconds: Set(None),
            camera_name: Set(clip.camera_name),
            upload_status: Set("uploaded".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert clip: {}", e)))
    }
}
