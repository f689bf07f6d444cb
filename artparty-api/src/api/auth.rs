//! Auth bridge endpoints
//!
//! Two operations backing the frontend's external login flow. `check_user`
//! answers with a sentinel `{"valid": false}` for an unknown uid instead of
//! an error status; every other lookup in this service 404s. `register_user`
//! creates unconditionally, with no duplicate check on the uid.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::api::users::UserResponse;
use crate::api::ApiError;
use crate::db::users;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckUserPayload {
    pub uid: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterUserPayload {
    pub name: String,
    pub email: String,
    pub img: String,
    pub uid: String,
}

/// POST /auth/check_user
pub async fn check_user(
    State(state): State<AppState>,
    Json(payload): Json<CheckUserPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let uid = payload
        .uid
        .ok_or_else(|| ApiError::BadRequest("Missing required parameter: uid".to_string()))?;

    match users::find_user_by_uid(&state.db, &uid).await? {
        Some(user) => Ok(Json(UserResponse::from(user)).into_response()),
        None => Ok(Json(json!({ "valid": false })).into_response()),
    }
}

/// POST /auth/register_user
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserPayload>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = users::create_user(
        &state.db,
        &payload.name,
        &payload.email,
        &payload.img,
        &payload.uid,
    )
    .await?;

    Ok(Json(user.into()))
}
