//! API integration tests.
//!
//! Each test builds the full actix app against a mocked database
//! connection, so no running PostgreSQL is required.


mod booking_hours_tests;
mod courts_tests;
mod health_tests;
