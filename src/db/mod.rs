//! Database module providing connection management and per-entity queries.

pub mod booking_hours;
pub mod clips;
pub mod courts;

pub use clips::NewClip;

use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Upper bound on concurrent store connections.
const MAX_CONNECTIONS: u32 = 10;
/// Idle connections kept warm.
const MIN_CONNECTIONS: u32 = 2;
/// Maximum connection lifetime before recycling.
const MAX_LIFETIME: Duration = Duration::from_secs(30 * 60);

/// Shared database handle, cloned into each worker.
///
/// Wraps a bounded SeaORM connection pool; handlers receive it via
/// `web::Data` rather than a process-wide singleton so tests can inject
/// a mocked connection.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Connect to PostgreSQL using the application configuration.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ConnectOptions::new(config.database_url());
        options
            .max_connections(MAX_CONNECTIONS)
            .min_connections(MIN_CONNECTIONS)
            .max_lifetime(MAX_LIFETIME)
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

        Ok(DbPool { conn })
    }

    /// Wrap an existing connection (used by tests with a mocked store).
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        DbPool { conn }
    }

    /// Get access to the connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Round-trip connectivity probe used by the health endpoint.
    pub async fn ping(&self) -> bool {
        let stmt =
            Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
        self.conn.query_one_raw(stmt).await.is_ok()
    }
}
