//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Court Booking Server",
        version = "1.0.0",
        description = "API server for managing courts, booking hours, and uploaded video clips"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        // Court endpoints
        api::courts::list_courts,
        api::courts::create_court,
        // Booking hour endpoints
        api::booking_hours::list_booking_hours,
        api::booking_hours::create_booking_hour,
        // Clip endpoints
        api::clips::list_clips,
        api::clips::upload_clip,
    ),
    components(
        schemas(
            // Common
            error::ErrorBody,
            // Health
            api::health::HealthStatus,
            models::ApiResponse<api::health::HealthStatus>,
            // Courts
            models::CourtResponse,
            models::CreateCourtRequest,
            models::ApiResponse<models::CourtResponse>,
            models::ApiResponse<Vec<models::CourtResponse>>,
            // Booking hours
            models::BookingHourResponse,
            models::CreateBookingHourRequest,
            models::ApiResponse<models::BookingHourResponse>,
            models::ApiResponse<Vec<models::BookingHourResponse>>,
            // Clips
            models::ClipResponse,
            models::ApiResponse<models::ClipResponse>,
            models::ApiResponse<Vec<models::ClipResponse>>,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Courts", description = "Court management"),
        (name = "Booking hours", description = "Booking hour management"),
        (name = "Clips", description = "Clip upload and listing")
    )
)]
pub struct ApiDoc;
