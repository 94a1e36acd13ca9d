//! Application state shared across handlers

use sqlx::PgPool;

use crate::events::Producer;
use crate::repositories::UserRepository;
use crate::service::Users;

/// The service wired with its production collaborators.
pub type UserService = Users<UserRepository, Producer>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub users: UserService,
}
