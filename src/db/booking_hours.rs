//! Database queries for booking hours.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entity::booking_hour::{self, ActiveModel, Entity as BookingHour};
use crate::error::{AppError, AppResult};

use super::DbPool;

impl DbPool {
    /// List booking hours, newest first, optionally filtered by court.
    pub async fn list_booking_hours(
        &self,
        court_id: Option<i32>,
    ) -> AppResult<Vec<booking_hour::Model>> {
        let mut select = BookingHour::find();

        if let Some(court_id) = court_id {
            select = select.filter(booking_hour::Column::CourtId.eq(court_id));
        }

        select
            .order_by_desc(booking_hour::Column::DateStart)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list booking hours: {}", e)))
    }

    /// Insert a new booking hour.
    ///
    /// The caller is responsible for the court existence check; the two
    /// statements are deliberately not wrapped in a transaction.
    pub async fn insert_booking_hour(
        &self,
        court_id: i32,
        date_start: DateTime<Utc>,
        date_end: DateTime<Utc>,
        status: String,
    ) -> AppResult<booking_hour::Model> {
        let now = Utc::now();

        let model = ActiveModel {
            court_id: Set(court_id),
            date_start: Set(date_start),
            date_end: Set(date_end),
            status: Set(status),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert booking hour: {}", e)))
    }

    /// Get a booking hour by id.
    pub async fn find_booking_hour(&self, id: i32) -> AppResult<Option<booking_hour::Model>> {
        BookingHour::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get booking hour: {}", e)))
    }
}
