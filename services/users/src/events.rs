//! Event production for user CRUD operations
//!
//! The producer here is a stub standing in for a Kafka client. A real
//! implementation would hand events off asynchronously and recover failed
//! sends on a later run; callers never wait for or learn about delivery.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::User;

/// Topic an event is produced on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// User entity events such as CRUD events.
    Users,
}

impl Topic {
    /// Wire name of the topic.
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Users => "users",
        }
    }
}

/// The kind of change that happened to a user entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    UserCreated,
    UserUpdated,
    UserDeleted,
}

/// Event payload emitted after a successful user write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEvent {
    pub event_type: EventType,
    pub id: String,
    pub user: Option<User>,
}

/// A type that can produce events on user CRUD operations.
///
/// Production is fire-and-forget: the signature has no error channel, so
/// delivery failures can never surface to callers.
#[async_trait]
pub trait Events: Send + Sync {
    async fn produce(&self, topic: Topic, event: UserEvent);
}

/// No-op producer standing in for a Kafka client.
#[derive(Debug, Clone, Copy, Default)]
pub struct Producer;

impl Producer {
    /// Create a new producer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Events for Producer {
    async fn produce(&self, topic: Topic, event: UserEvent) {
        debug!(
            "produced {:?} event for user {} on topic {}",
            event.event_type,
            event.id,
            topic.as_str()
        );
    }
}
