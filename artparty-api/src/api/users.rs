//! HTTP handlers for users

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::db::users::{self, User};
use crate::AppState;

/// Serialized user record
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub img: String,
    pub uid: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            img: user.img,
            uid: user.uid,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub img: String,
    pub uid: String,
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = users::list_users(&state.db).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/:id
pub async fn retrieve_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = users::get_user(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(Json(user.into()))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = users::create_user(
        &state.db,
        &payload.name,
        &payload.email,
        &payload.img,
        &payload.uid,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserPayload>,
) -> Result<StatusCode, ApiError> {
    let mut user = users::get_user(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    user.name = payload.name;
    user.email = payload.email;
    user.img = payload.img;
    user.uid = payload.uid;
    users::save_user(&state.db, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /users/:id
pub async fn destroy_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !users::delete_user(&state.db, id).await? {
        return Err(ApiError::not_found("User"));
    }

    Ok(StatusCode::NO_CONTENT)
}
