//! Clip response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity::clip;

/// Clip as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClipResponse {
    pub id: i32,
    #[serde(rename = "bookingHourId")]
    pub booking_hour_id: i32,
    pub filename: String,
    pub file_path: String,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub duration_seconds: Option<i32>,
    pub camera_name: Option<String>,
    pub upload_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<clip::Model> for ClipResponse {
    fn from(m: clip::Model) -> Self {
        ClipResponse {
            id: m.id,
            booking_hour_id: m.booking_hour_id,
            filename: m.filename,
            file_path: m.file_path,
            file_size: m.file_size,
            mime_type: m.mime_type,
            duration_seconds: m.duration_seconds,
            camera_name: m.camera_name,
            upload_status: m.upload_status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Query parameters for `GET /clips`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListClipsQuery {
    #[serde(rename = "bookingHourId")]
    pub booking_hour_id: Option<String>,
}
