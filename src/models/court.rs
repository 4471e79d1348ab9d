//! Court request/response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity::court;

/// Court as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourtResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<court::Model> for CourtResponse {
    fn from(m: court::Model) -> Self {
        CourtResponse {
            id: m.id,
            name: m.name,
            description: m.description,
            is_active: m.is_active,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Body for `POST /courts`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourtRequest {
    /// Court name; required and unique.
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

/// Query parameters for `GET /courts`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListCourtsQuery {
    /// Case-insensitive substring filter on the court name.
    pub name: Option<String>,
}
