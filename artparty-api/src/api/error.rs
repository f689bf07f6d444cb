//! Uniform API error responses
//!
//! One policy for every handler: 404 carries `{"message": ...}`, 400 and 500
//! carry `{"error": ...}`. The auth bridge's `check_user` is the single
//! deliberate exception and never produces an error status for an unknown
//! uid.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// API errors
#[derive(Debug)]
pub enum ApiError {
    /// Referenced id absent -> 404 with a message payload
    NotFound(String),
    /// Missing or invalid request field -> 400 with an error payload
    BadRequest(String),
    /// Database or other internal failure -> 500 with an error payload
    Internal(String),
}

impl ApiError {
    /// 404 for a missing entity, e.g. `ApiError::not_found("User")`
    pub fn not_found(what: &str) -> Self {
        Self::NotFound(format!("{} not found", what))
    }
}

impl From<artparty_common::Error> for ApiError {
    fn from(err: artparty_common::Error) -> Self {
        use artparty_common::Error;

        match err {
            Error::NotFound(message) => ApiError::NotFound(message),
            Error::InvalidInput(reason) => ApiError::BadRequest(reason),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApiError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": reason }))).into_response()
            }
            ApiError::Internal(reason) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": reason })),
            )
                .into_response(),
        }
    }
}
