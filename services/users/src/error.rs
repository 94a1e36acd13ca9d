//! HTTP error mapping for the users service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::error::{Kind, ServiceError};
use serde_json::json;
use thiserror::Error;

/// Transport-level wrapper turning taxonomy errors into HTTP responses.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] pub ServiceError);

impl ApiError {
    /// The HTTP status derived from the error's kind.
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            Kind::InvalidRequest | Kind::Validation => StatusCode::BAD_REQUEST,
            Kind::NotFound => StatusCode::NOT_FOUND,
            Kind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The full cause chain stays in the server log; clients only see the
        // top-level taxonomy message.
        tracing::error!("error occurred in request: {}", render_chain(&self.0));

        let body = Json(json!({
            "error": self.0.to_string(),
        }));

        (self.status(), body).into_response()
    }
}

fn render_chain(err: &ServiceError) -> String {
    let mut rendered = err.to_string();

    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        rendered.push_str(" -- ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }

    rendered
}
