//! API request/response models.

use serde::Serialize;
use utoipa::ToSchema;

pub mod booking_hour;
pub mod clip;
pub mod court;

pub use booking_hour::{BookingHourResponse, CreateBookingHourRequest, ListBookingHoursQuery};
pub use clip::{ClipResponse, ListClipsQuery};
pub use court::{CourtResponse, CreateCourtRequest, ListCourtsQuery};

/// Uniform response envelope: `{success, message, data}`.
///
/// Every endpoint, success or failure, wraps its payload in this shape.
/// `data` is null on failure (see [`crate::error::ErrorBody`]).
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Build a success envelope.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        ApiResponse {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}
