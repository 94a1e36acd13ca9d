//! Users service models

pub mod filter;
pub mod user;

// Re-export for convenience
pub use filter::{Filter, FilterField, MatchType};
pub use user::User;
