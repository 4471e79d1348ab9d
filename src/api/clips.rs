//! Clip API handlers: multipart upload and listing.

use std::path::PathBuf;

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use futures_util::StreamExt;
use tracing::info;

use crate::db::{DbPool, NewClip};
use crate::error::{AppError, AppResult};
use crate::models::{ApiResponse, ClipResponse, ListClipsQuery};
use crate::services::{
    camera_name_from_description, drain_field, generate_clip_filename, mime_for_extension,
    stage_field, StagedClip, UploadSettings,
};

/// Text fields collected from the multipart form before validation.
#[derive(Default)]
struct UploadForm {
    booking_hour_id: Option<String>,
    camera_name: Option<String>,
    description: Option<String>,
    staged: Option<StagedClip>,
}

/// List clips, newest first, optionally filtered by booking hour.
#[utoipa::path(
    get,
    path = "/api/v1/clips",
    tag = "Clips",
    params(ListClipsQuery),
    responses(
        (status = 200, description = "Clips retrieved", body = ApiResponse<Vec<ClipResponse>>),
        (status = 400, description = "Non-integer bookingHourId filter", body = crate::error::ErrorBody),
    )
)]
pub async fn list_clips(
    pool: web::Data<DbPool>,
    query: web::Query<ListClipsQuery>,
) -> AppResult<HttpResponse> {
    let booking_hour_id = match query.booking_hour_id.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            raw.parse::<i32>()
                .map_err(|_| AppError::InvalidInput("Invalid booking hour ID".to_string()))?,
        ),
        None => None,
    };

    let clips = pool.list_clips(booking_hour_id).await?;
    let data: Vec<ClipResponse> = clips.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Clips retrieved successfully", data)))
}

/// Upload a clip as multipart form data.
///
/// Recognized fields: `video` (the file), `bookingHourId`, `camera_name`,
/// `description`. Unknown fields are drained and ignored. The file is
/// streamed into a staging path first so validation failures never leave
/// a half-written final file; on any error the staging file is removed.
#[utoipa::path(
    post,
    path = "/api/v1/clips",
    tag = "Clips",
    responses(
        (status = 201, description = "Clip uploaded", body = ApiResponse<ClipResponse>),
        (status = 400, description = "Invalid input or booking hour missing", body = crate::error::ErrorBody),
        (status = 500, description = "Storage or metadata write failure", body = crate::error::ErrorBody),
    )
)]
pub async fn upload_clip(
    pool: web::Data<DbPool>,
    settings: web::Data<UploadSettings>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let mut staging_path: Option<PathBuf> = None;

    let result = process_upload(&pool, &settings, payload, &mut staging_path).await;

    if result.is_err() {
        // After a successful rename this path no longer exists and the
        // removal is a no-op.
        if let Some(path) = staging_path {
            let _ = tokio::fs::remove_file(path).await;
        }
    }

    result
}

async fn process_upload(
    pool: &DbPool,
    settings: &UploadSettings,
    mut payload: Multipart,
    staging_path: &mut Option<PathBuf>,
) -> AppResult<HttpResponse> {
    let mut form = UploadForm::default();

    while let Some(field) = payload.next().await {
        let mut field =
            field.map_err(|e| AppError::InvalidInput(format!("Failed to parse form: {}", e)))?;

        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .unwrap_or("")
            .to_string();

        match name.as_str() {
            "video" => {
                let staged = stage_field(&mut field, settings).await?;
                *staging_path = Some(staged.path.clone());
                form.staged = Some(staged);
            }
            "bookingHourId" => form.booking_hour_id = Some(read_text_field(&mut field).await?),
            "camera_name" => form.camera_name = Some(read_text_field(&mut field).await?),
            "description" => form.description = Some(read_text_field(&mut field).await?),
            _ => drain_field(&mut field).await,
        }
    }

    let booking_hour_id = form
        .booking_hour_id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Booking hour ID is required".to_string()))?;

    let booking_hour_id: i32 = booking_hour_id
        .parse()
        .map_err(|_| AppError::InvalidInput("Invalid booking hour ID".to_string()))?;

    if pool.find_booking_hour(booking_hour_id).await?.is_none() {
        return Err(AppError::InvalidInput("Booking hour not found".to_string()));
    }

    let staged = form
        .staged
        .take()
        .ok_or_else(|| AppError::InvalidInput("No video file provided".to_string()))?;

    let filename = generate_clip_filename(booking_hour_id, Utc::now(), &staged.original_filename);
    let final_path = settings.clips_dir.join(&filename);

    tokio::fs::rename(&staged.path, &final_path)
        .await
        .map_err(|e| AppError::Filesystem(format!("Failed to save file: {}", e)))?;

    let mime_type = staged
        .declared_mime
        .clone()
        .unwrap_or_else(|| mime_for_extension(&staged.original_filename).to_string());

    let camera_name = form
        .camera_name
        .filter(|s| !s.is_empty())
        .or_else(|| {
            form.description
                .as_deref()
                .and_then(camera_name_from_description)
        });

    let clip = pool
        .insert_clip(NewClip {
            booking_hour_id,
            filename: filename.clone(),
            file_path: final_path.to_string_lossy().into_owned(),
            file_size: staged.size as i64,
            mime_type,
            camera_name,
        })
        .await?;

    info!(
        "Clip uploaded: id={}, booking_hour_id={}, filename={}, size={}",
        clip.id, clip.booking_hour_id, clip.filename, staged.size
    );

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        "Clip uploaded successfully",
        ClipResponse::from(clip),
    )))
}

/// Collect a text field into a UTF-8 string (lossy on invalid bytes).
async fn read_text_field(field: &mut actix_multipart::Field) -> AppResult<String> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk =
            chunk.map_err(|e| AppError::InvalidInput(format!("Failed to parse form: {}", e)))?;
        bytes.extend_from_slice(&chunk);
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Configure clip routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/clips")
            .route(web::get().to(list_clips))
            .route(web::post().to(upload_clip)),
    );
}
