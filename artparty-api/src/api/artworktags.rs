//! HTTP handlers for artwork-tag join rows

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::tags::TagResponse;
use crate::api::ApiError;
use crate::db::artwork_tags::{self, ArtworkTag};
use crate::db::{artworks, tags};
use crate::AppState;

/// Serialized join row; `artwork` is the plain foreign-key id, the tag is
/// inlined one level
#[derive(Debug, Serialize)]
pub struct ArtworkTagResponse {
    pub id: i64,
    pub artwork: i64,
    pub tag: TagResponse,
}

impl From<ArtworkTag> for ArtworkTagResponse {
    fn from(join: ArtworkTag) -> Self {
        Self {
            id: join.id,
            artwork: join.artwork_id,
            tag: TagResponse {
                id: join.tag_id,
                label: join.tag_label,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ArtworkTagPayload {
    pub artwork: i64,
    pub tag: i64,
}

/// GET /artworktags
pub async fn list_artwork_tags(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArtworkTagResponse>>, ApiError> {
    let joins = artwork_tags::list_artwork_tags(&state.db).await?;
    Ok(Json(joins.into_iter().map(ArtworkTagResponse::from).collect()))
}

/// GET /artworktags/:id
pub async fn retrieve_artwork_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ArtworkTagResponse>, ApiError> {
    let join = artwork_tags::get_artwork_tag(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("ArtworkTag"))?;

    Ok(Json(join.into()))
}

/// POST /artworktags
pub async fn create_artwork_tag(
    State(state): State<AppState>,
    Json(payload): Json<ArtworkTagPayload>,
) -> Result<(StatusCode, Json<ArtworkTagResponse>), ApiError> {
    if artworks::get_artwork(&state.db, payload.artwork).await?.is_none() {
        return Err(ApiError::not_found("Artwork"));
    }
    let tag = tags::get_tag(&state.db, payload.tag)
        .await?
        .ok_or_else(|| ApiError::not_found("Tag"))?;

    let id = artwork_tags::create_artwork_tag(&state.db, payload.artwork, payload.tag).await?;

    let response = ArtworkTagResponse {
        id,
        artwork: payload.artwork,
        tag: tag.into(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// DELETE /artworktags/:id
pub async fn destroy_artwork_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !artwork_tags::delete_artwork_tag(&state.db, id).await? {
        return Err(ApiError::not_found("ArtworkTag"));
    }

    Ok(StatusCode::NO_CONTENT)
}
