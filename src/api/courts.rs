//! Court API handlers.

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{ApiResponse, CourtResponse, CreateCourtRequest, ListCourtsQuery};

/// List courts.
///
/// With a `name` filter: case-insensitive substring match over active
/// courts, 404 when nothing matches. Without: every active court.
#[utoipa::path(
    get,
    path = "/api/v1/courts",
    tag = "Courts",
    params(ListCourtsQuery),
    responses(
        (status = 200, description = "Courts retrieved", body = ApiResponse<Vec<CourtResponse>>),
        (status = 404, description = "Name filter matched no court", body = crate::error::ErrorBody),
    )
)]
pub async fn list_courts(
    pool: web::Data<DbPool>,
    query: web::Query<ListCourtsQuery>,
) -> AppResult<HttpResponse> {
    let name_filter = query.name.as_deref().filter(|s| !s.is_empty());

    let courts = pool.list_courts(name_filter).await?;

    if courts.is_empty() && name_filter.is_some() {
        return Err(AppError::NotFound("Court not found".to_string()));
    }

    let data: Vec<CourtResponse> = courts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Courts retrieved successfully", data)))
}

/// Create a court.
#[utoipa::path(
    post,
    path = "/api/v1/courts",
    tag = "Courts",
    request_body = CreateCourtRequest,
    responses(
        (status = 201, description = "Court created", body = ApiResponse<CourtResponse>),
        (status = 400, description = "Missing name", body = crate::error::ErrorBody),
        (status = 409, description = "Duplicate name", body = crate::error::ErrorBody),
    )
)]
pub async fn create_court(
    pool: web::Data<DbPool>,
    body: web::Json<CreateCourtRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.name.is_empty() {
        return Err(AppError::InvalidInput("Court name is required".to_string()));
    }

    let court = pool.insert_court(req.name, req.description).await?;

    info!("Court created: id={}, name={}", court.id, court.name);

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        "Court created successfully",
        CourtResponse::from(court),
    )))
}

/// Configure court routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/courts")
            .route(web::get().to(list_courts))
            .route(web::post().to(create_court)),
    );
}
