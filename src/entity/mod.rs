//! SeaORM entity definitions.

pub mod booking_hour;
pub mod clip;
pub mod court;
