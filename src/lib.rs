//! Court booking server library.
//!
//! Core functionality for the booking API: database operations, clip
//! upload handling, and the HTTP endpoint modules.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
