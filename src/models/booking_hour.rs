//! Booking hour request/response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity::booking_hour;

/// Booking hour as returned by the API.
///
/// Field names mirror the wire contract consumed by the surveillance
/// front end: camelCase for the caller-supplied fields, snake_case for
/// the server-managed timestamps.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingHourResponse {
    pub id: i32,
    #[serde(rename = "courtId")]
    pub court_id: i32,
    #[serde(rename = "dateStart")]
    pub date_start: DateTime<Utc>,
    #[serde(rename = "dateEnd")]
    pub date_end: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<booking_hour::Model> for BookingHourResponse {
    fn from(m: booking_hour::Model) -> Self {
        BookingHourResponse {
            id: m.id,
            court_id: m.court_id,
            date_start: m.date_start,
            date_end: m.date_end,
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Body for `POST /booking-hours`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingHourRequest {
    /// Referenced court; must exist and be active.
    #[serde(rename = "courtId", default)]
    pub court_id: i32,
    #[serde(rename = "dateStart")]
    pub date_start: Option<DateTime<Utc>>,
    #[serde(rename = "dateEnd")]
    pub date_end: Option<DateTime<Utc>>,
    /// Defaults to "active" when omitted.
    pub status: Option<String>,
}

/// Query parameters for `GET /booking-hours`.
///
/// The filter is accepted as a raw string so that a non-integer value can
/// be rejected with the standard envelope rather than the framework's own
/// deserialization error.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListBookingHoursQuery {
    #[serde(rename = "courtId")]
    pub court_id: Option<String>,
}
