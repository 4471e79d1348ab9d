//! API endpoint modules.

pub mod booking_hours;
pub mod clips;
pub mod courts;
pub mod health;
pub mod openapi;

pub use booking_hours::configure_routes as configure_booking_hour_routes;
pub use clips::configure_routes as configure_clip_routes;
pub use courts::configure_routes as configure_court_routes;
pub use health::configure_health_routes;
pub use openapi::ApiDoc;
