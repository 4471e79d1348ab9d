//! Clip upload mechanics: staging, naming, and MIME inference.
//!
//! The multipart `video` field is streamed chunk-wise into a staging file
//! inside the clips directory, then renamed to its final generated name
//! once validation has passed. The rename happens before the metadata
//! insert; an insert failure therefore leaves the final file on disk with
//! no row (accepted limitation, see the clip handler).

use std::path::{Path, PathBuf};

use actix_multipart::Field;
use chrono::{DateTime, Utc};
use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, AppResult};

/// Upload directory and size cap, shared with each worker.
#[derive(Debug, Clone)]
pub struct UploadSettings {
    /// Destination directory for clip files.
    pub clips_dir: PathBuf,
    /// Maximum accepted clip size in bytes.
    pub max_size: usize,
}

/// A fully received upload sitting in its staging file.
#[derive(Debug)]
pub struct StagedClip {
    /// Staging file path inside the clips directory.
    pub path: PathBuf,
    /// Exact byte count written.
    pub size: u64,
    /// Filename as declared by the client (extension source).
    pub original_filename: String,
    /// Content type declared in the multipart field, if any.
    pub declared_mime: Option<String>,
}

/// Generate the collision-resistant clip filename:
/// `clip_<bookingHourId>_<YYYYMMDD_HHMMSS><original extension>`.
///
/// Two uploads for the same booking hour within the same second and with
/// the same extension would collide; the unique constraint on
/// `clips.filename` turns that into an insert error rather than a silent
/// overwrite.
pub fn generate_clip_filename(
    booking_hour_id: i32,
    timestamp: DateTime<Utc>,
    original_filename: &str,
) -> String {
    let ext = Path::new(original_filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();

    format!(
        "clip_{}_{}{}",
        booking_hour_id,
        timestamp.format("%Y%m%d_%H%M%S"),
        ext
    )
}

/// Fixed extension-to-MIME fallback used when the upload carries no
/// declared content type. Anything unrecognized is treated as mp4.
pub fn mime_for_extension(filename: &str) -> &'static str {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "mp4" => "video/mp4",
        "avi" => "video/x-msvideo",
        "webm" => "video/webm",
        _ => "video/mp4",
    }
}

/// Stream a multipart file field into a staging file, enforcing the size
/// cap while writing. On any failure the staging file is removed.
pub async fn stage_field(field: &mut Field, settings: &UploadSettings) -> AppResult<StagedClip> {
    let original_filename = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .unwrap_or("")
        .to_string();

    let declared_mime = field.content_type().map(|m| m.to_string());

    tokio::fs::create_dir_all(&settings.clips_dir)
        .await
        .map_err(|e| AppError::Filesystem(format!("Failed to create upload directory: {}", e)))?;

    let path = settings
        .clips_dir
        .join(format!(".upload_{}.part", Utc::now().timestamp_micros()));

    match write_field(field, &path, settings.max_size).await {
        Ok(size) => Ok(StagedClip {
            path,
            size,
            original_filename,
            declared_mime,
        }),
        Err(e) => {
            let _ = tokio::fs::remove_file(&path).await;
            Err(e)
        }
    }
}

async fn write_field(field: &mut Field, path: &Path, max_size: usize) -> AppResult<u64> {
    let mut file = tokio::fs::File::create(path)
        .await
        .map_err(|e| AppError::Filesystem(format!("Failed to create file: {}", e)))?;

    let mut size: u64 = 0;
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| AppError::InvalidInput(format!("Failed to parse form: {}", e)))?;
        size += chunk.len() as u64;
        if size > max_size as u64 {
            return Err(AppError::InvalidInput(
                "Failed to parse form: upload exceeds maximum size".to_string(),
            ));
        }
        file.write_all(&chunk)
            .await
            .map_err(|e| AppError::Filesystem(format!("Failed to save file: {}", e)))?;
    }

    file.flush()
        .await
        .map_err(|e| AppError::Filesystem(format!("Failed to save file: {}", e)))?;

    Ok(size)
}

/// Drain and discard the remaining chunks of an unrecognized field.
pub async fn drain_field(field: &mut Field) {
    while let Some(chunk) = field.next().await {
        if chunk.is_err() {
            break;
        }
    }
}
