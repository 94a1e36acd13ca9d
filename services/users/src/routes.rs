//! Users service routes

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use common::error::ServiceError;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ApiError;
use crate::models::{Filter, User};
use crate::state::AppState;

/// Request body for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchUsersRequest {
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub limit: i64,
}

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedUserResponse {
    pub success: bool,
}

/// Successful payloads are wrapped in a data envelope.
#[derive(Debug, Serialize)]
struct DataResponse<T> {
    data: T,
}

/// Create the router for the users service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/user", post(create_user))
        .route(
            "/user/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        // Not the most RESTful shape for a search, but a body is much easier
        // to parse than filter query strings.
        .route("/users/search", post(search_users))
        .with_state(state)
}

/// Health check endpoint, pinging the database.
pub async fn health_check(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    common::database::health_check(&state.db_pool)
        .await
        .map_err(|e| ApiError(ServiceError::unknown().with_source(e)))?;

    Ok(Json(json!({
        "status": "ok",
        "service": "users-service"
    })))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(user) = payload.map_err(invalid_body)?;

    let created = state.users.create_user(&user).await?;

    Ok(Json(DataResponse { data: created }))
}

/// Get a user by id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.users.get_user(&id).await?;

    Ok(Json(DataResponse { data: user }))
}

/// Partially update a user; absent body fields keep their stored values
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(mut user) = payload.map_err(invalid_body)?;
    user.id = Some(id);

    let updated = state.users.update_user(&user).await?;

    Ok(Json(DataResponse { data: updated }))
}

/// Delete a user by id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.users.delete_user(&id).await?;

    Ok(Json(DataResponse {
        data: DeletedUserResponse { success: true },
    }))
}

/// Search users by filters with pagination
pub async fn search_users(
    State(state): State<AppState>,
    payload: Result<Json<SearchUsersRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(invalid_body)?;

    let users = state
        .users
        .find_users(&req.filters, req.offset, req.limit)
        .await?;

    Ok(Json(DataResponse { data: users }))
}

fn invalid_body(rejection: JsonRejection) -> ApiError {
    tracing::error!("failed to read request body: {}", rejection);
    ApiError(ServiceError::invalid_request().with_source(rejection))
}
