//! Court Booking Server - Main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use court_booking_lib::api;
use court_booking_lib::config::Config;
use court_booking_lib::db::DbPool;
use court_booking_lib::error::AppError;
use court_booking_lib::middleware::RequestLogger;
use court_booking_lib::migration::Migrator;
use court_booking_lib::services::UploadSettings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("Check DB_HOST, DB_PORT, DB_USER, DB_PASSWORD, DB_NAME, SERVER_PORT, UPLOAD_DIR");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Court Booking Server");
    info!("========================================");

    // Create the upload directory tree up front so the first upload
    // never races directory creation across workers.
    let clips_dir = config.clips_dir();
    tokio::fs::create_dir_all(&clips_dir)
        .await
        .expect("Failed to create upload directory");
    info!("Upload directory: {}", clips_dir.display());

    // Connect to PostgreSQL
    let pool = match DbPool::connect(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };
    info!("Database connection established");

    // Run migrations
    if let Err(e) = Migrator::up(pool.connection(), None).await {
        error!("Failed to run migrations: {}", e);
        std::process::exit(1);
    }
    info!("Database migrations complete");

    let bind_address = config.bind_address();
    let upload_settings = UploadSettings {
        clips_dir,
        max_size: config.max_upload_size,
    };
    let max_upload_size = config.max_upload_size;

    let worker_count = num_cpus::get();
    info!(
        "Starting server at http://{} ({} workers)",
        bind_address, worker_count
    );
    info!(
        "Upload limit: {}MB per clip",
        max_upload_size / 1024 / 1024
    );

    HttpServer::new(move || {
        // Any origin may call this API; it fronts local camera tooling.
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(upload_settings.clone()))
            // Malformed JSON still gets the standard error envelope.
            .app_data(web::JsonConfig::default().error_handler(|_, _| {
                AppError::InvalidInput("Invalid JSON payload".to_string()).into()
            }))
            // Multipart overhead on top of the clip itself.
            .app_data(web::PayloadConfig::new(max_upload_size + 1024 * 1024))
            .service(
                web::scope("/api/v1")
                    .configure(api::configure_health_routes)
                    .configure(api::configure_court_routes)
                    .configure(api::configure_booking_hour_routes)
                    .configure(api::configure_clip_routes),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
            )
    })
    .workers(worker_count)
    .bind(&bind_address)?
    .run()
    .await
}
