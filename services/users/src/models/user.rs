//! User entity model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person using the platform.
///
/// Every field is optional at the transport boundary so the same shape serves
/// create and partial-update payloads; the database enforces presence and
/// uniqueness where it matters. The id is an opaque server-generated string
/// that only the store interprets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
