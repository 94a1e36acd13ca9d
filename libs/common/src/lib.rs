//! Common library for the users service
//!
//! This crate provides shared functionality used across the workspace:
//! database connectivity and the service error taxonomy.

pub mod database;
pub mod error;
