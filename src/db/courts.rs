//! Database queries for courts.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr};

use crate::entity::court::{self, ActiveModel, Entity as Court};
use crate::error::{AppError, AppResult};

use super::DbPool;

impl DbPool {
    /// List active courts, optionally narrowed by a case-insensitive
    /// substring match on the name. Inactive courts never appear.
    pub async fn list_courts(&self, name_filter: Option<&str>) -> AppResult<Vec<court::Model>> {
        use sea_orm::sea_query::Expr;

        let mut select = Court::find().filter(court::Column::IsActive.eq(true));

        if let Some(filter) = name_filter {
            select = select.filter(Expr::cust_with_values(
                "name ILIKE $1",
                [format!("%{}%", filter)],
            ));
        }

        select
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list courts: {}", e)))
    }

    /// Insert a new court. A duplicate name surfaces as [`AppError::Conflict`].
    pub async fn insert_court(
        &self,
        name: String,
        description: Option<String>,
    ) -> AppResult<court::Model> {
        let now = Utc::now();

        let model = ActiveModel {
            name: Set(name),
            description: Set(description),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| court_insert_error(e.sql_err(), &e.to_string()))
    }

    /// Find a court by id, only if it is active.
    pub async fn find_active_court(&self, id: i32) -> AppResult<Option<court::Model>> {
        Court::find_by_id(id)
            .filter(court::Column::IsActive.eq(true))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get court: {}", e)))
    }
}

/// Classify a failed court insert: a unique-constraint violation means the
/// name is already taken, everything else is a plain database failure.
fn court_insert_error(sql_err: Option<SqlErr>, detail: &str) -> AppError {
    if matches!(sql_err, Some(SqlErr::UniqueConstraintViolation(_))) {
        AppError::Conflict("Court with this name already exists".to_string())
    } else {
        AppError::Database(format!("Failed to insert court: {}", detail))
    }
}
