//! HTTP handlers for tags
//!
//! Tags have no update or delete endpoint; the vocabulary only grows.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::db::tags::{self, Tag};
use crate::AppState;

/// Serialized tag record
#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub id: i64,
    pub label: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            label: tag.label,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TagPayload {
    pub label: String,
}

/// GET /tags
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<TagResponse>>, ApiError> {
    let tags = tags::list_tags(&state.db).await?;
    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}

/// GET /tags/:id
pub async fn retrieve_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TagResponse>, ApiError> {
    let tag = tags::get_tag(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Tag"))?;

    Ok(Json(tag.into()))
}

/// POST /tags
pub async fn create_tag(
    State(state): State<AppState>,
    Json(payload): Json<TagPayload>,
) -> Result<(StatusCode, Json<TagResponse>), ApiError> {
    let tag = tags::create_tag(&state.db, &payload.label).await?;

    Ok((StatusCode::CREATED, Json(tag.into())))
}
