//! Booking hour API handlers.

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    ApiResponse, BookingHourResponse, CreateBookingHourRequest, ListBookingHoursQuery,
};

/// List booking hours, newest first, optionally filtered by court.
#[utoipa::path(
    get,
    path = "/api/v1/booking-hours",
    tag = "Booking hours",
    params(ListBookingHoursQuery),
    responses(
        (status = 200, description = "Booking hours retrieved", body = ApiResponse<Vec<BookingHourResponse>>),
        (status = 400, description = "Non-integer courtId filter", body = crate::error::ErrorBody),
    )
)]
pub async fn list_booking_hours(
    pool: web::Data<DbPool>,
    query: web::Query<ListBookingHoursQuery>,
) -> AppResult<HttpResponse> {
    let court_id = match query.court_id.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            raw.parse::<i32>()
                .map_err(|_| AppError::InvalidInput("Invalid court ID".to_string()))?,
        ),
        None => None,
    };

    let booking_hours = pool.list_booking_hours(court_id).await?;
    let data: Vec<BookingHourResponse> = booking_hours.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Booking hours retrieved successfully",
        data,
    )))
}

/// Create a booking hour against an existing, active court.
///
/// The court check and the insert are two independent statements; a court
/// deactivated between them can still end up referenced. Accepted gap.
#[utoipa::path(
    post,
    path = "/api/v1/booking-hours",
    tag = "Booking hours",
    request_body = CreateBookingHourRequest,
    responses(
        (status = 201, description = "Booking hour created", body = ApiResponse<BookingHourResponse>),
        (status = 400, description = "Invalid input or court missing/inactive", body = crate::error::ErrorBody),
    )
)]
pub async fn create_booking_hour(
    pool: web::Data<DbPool>,
    body: web::Json<CreateBookingHourRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.court_id == 0 {
        return Err(AppError::InvalidInput("Court ID is required".to_string()));
    }

    let (Some(date_start), Some(date_end)) = (req.date_start, req.date_end) else {
        return Err(AppError::InvalidInput(
            "Date start and date end are required".to_string(),
        ));
    };

    // Referential precondition, reported as a validation failure rather
    // than a 404: the booking hour itself is the resource here.
    if pool.find_active_court(req.court_id).await?.is_none() {
        return Err(AppError::InvalidInput(
            "Court not found or inactive".to_string(),
        ));
    }

    let status = req
        .status
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "active".to_string());

    let booking_hour = pool
        .insert_booking_hour(req.court_id, date_start, date_end, status)
        .await?;

    info!(
        "Booking hour created: id={}, court_id={}",
        booking_hour.id, booking_hour.court_id
    );

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        "Booking hour created successfully",
        BookingHourResponse::from(booking_hour),
    )))
}

/// Configure booking hour routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/booking-hours")
            .route(web::get().to(list_booking_hours))
            .route(web::post().to(create_booking_hour)),
    );
}
