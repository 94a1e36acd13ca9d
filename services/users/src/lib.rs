//! Users service
//!
//! A small HTTP service exposing CRUD operations on the user entity, backed
//! by PostgreSQL, with stubbed event emission on writes. The search endpoint
//! builds its WHERE clause dynamically from caller-supplied filters checked
//! against a closed vocabulary of fields and match operators.

pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod service;
pub mod state;
pub mod validation;

/// Embedded migrations, applied at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
