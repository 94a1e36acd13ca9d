//! User service layer
//!
//! Orchestrates the store and event production. Taxonomy errors from the
//! store pass through unchanged; events are emitted best-effort after
//! successful writes.

use async_trait::async_trait;
use common::error::ServiceError;

use crate::events::{EventType, Events, Topic, UserEvent};
use crate::models::{Filter, User};
use crate::validation::validate_filters;

/// A type that can store users durably.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, user: &User) -> Result<User, ServiceError>;
    async fn get_user(&self, id: &str) -> Result<User, ServiceError>;
    async fn get_user_by_email(&self, email: &str) -> Result<User, ServiceError>;
    async fn find_users(
        &self,
        filters: &[Filter],
        offset: i64,
        limit: i64,
    ) -> Result<Vec<User>, ServiceError>;
    async fn update_user(&self, user: &User) -> Result<User, ServiceError>;
    async fn delete_user(&self, id: &str) -> Result<(), ServiceError>;
}

/// CRUD operations on users.
#[derive(Debug, Clone)]
pub struct Users<S, E> {
    store: S,
    events: E,
}

impl<S, E> Users<S, E>
where
    S: UserStore,
    E: Events,
{
    /// Wire a service instance from its collaborators.
    pub fn new(store: S, events: E) -> Self {
        Self { store, events }
    }

    /// Create a user with the provided data if it represents a unique new
    /// user.
    pub async fn create_user(&self, user: &User) -> Result<User, ServiceError> {
        // The database enforces presence and uniqueness itself, so no input
        // validation happens before storing.
        let created = self.store.insert_user(user).await?;

        // The write already succeeded; a lost event must not fail the call.
        self.events
            .produce(
                Topic::Users,
                UserEvent {
                    event_type: EventType::UserCreated,
                    id: created.id.clone().unwrap_or_default(),
                    user: Some(created.clone()),
                },
            )
            .await;

        Ok(created)
    }

    /// Get an existing user via their id.
    pub async fn get_user(&self, id: &str) -> Result<User, ServiceError> {
        self.store.get_user(id).await
    }

    /// Get an existing user via their email address.
    pub async fn get_user_by_email(&self, email: &str) -> Result<User, ServiceError> {
        self.store.get_user_by_email(email).await
    }

    /// Retrieve users matching all of the provided filters, paginated when
    /// limit is greater than zero.
    pub async fn find_users(
        &self,
        filters: &[Filter],
        offset: i64,
        limit: i64,
    ) -> Result<Vec<User>, ServiceError> {
        // The store enforces the same policy on its own; validating here as
        // well keeps both layers safe to call directly.
        validate_filters(filters)?;

        self.store.find_users(filters, offset, limit).await
    }

    /// Update an existing user with the fields present in the provided data.
    pub async fn update_user(&self, user: &User) -> Result<User, ServiceError> {
        let updated = self.store.update_user(user).await?;

        self.events
            .produce(
                Topic::Users,
                UserEvent {
                    event_type: EventType::UserUpdated,
                    id: updated.id.clone().unwrap_or_default(),
                    user: Some(updated.clone()),
                },
            )
            .await;

        Ok(updated)
    }

    /// Delete an existing user via their id.
    pub async fn delete_user(&self, id: &str) -> Result<(), ServiceError> {
        self.store.delete_user(id).await?;

        self.events
            .produce(
                Topic::Users,
                UserEvent {
                    event_type: EventType::UserDeleted,
                    id: id.to_string(),
                    user: None,
                },
            )
            .await;

        Ok(())
    }
}
