//! HTTP handlers for artists

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::db::artists::{self, Artist};
use crate::db::users;
use crate::AppState;

/// Serialized artist record; `user` is the plain foreign-key id
#[derive(Debug, Serialize)]
pub struct ArtistResponse {
    pub id: i64,
    pub user: i64,
    pub name: String,
    pub img: String,
}

impl From<Artist> for ArtistResponse {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            user: artist.user_id,
            name: artist.name,
            img: artist.img,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ArtistPayload {
    pub name: String,
    pub img: String,
    pub user: i64,
}

#[derive(Debug, Deserialize)]
pub struct ArtistListQuery {
    /// Restrict to artists owned by this user
    pub user: Option<i64>,
}

/// GET /artists?user=ID
///
/// A dangling `user` filter id is a 404, not an empty list.
pub async fn list_artists(
    State(state): State<AppState>,
    Query(query): Query<ArtistListQuery>,
) -> Result<Json<Vec<ArtistResponse>>, ApiError> {
    if let Some(user_id) = query.user {
        if users::get_user(&state.db, user_id).await?.is_none() {
            return Err(ApiError::not_found("User"));
        }
    }

    let artists = artists::list_artists(&state.db, query.user).await?;
    Ok(Json(artists.into_iter().map(ArtistResponse::from).collect()))
}

/// GET /artists/:id
pub async fn retrieve_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ArtistResponse>, ApiError> {
    let artist = artists::get_artist(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Artist"))?;

    Ok(Json(artist.into()))
}

/// POST /artists
pub async fn create_artist(
    State(state): State<AppState>,
    Json(payload): Json<ArtistPayload>,
) -> Result<(StatusCode, Json<ArtistResponse>), ApiError> {
    if users::get_user(&state.db, payload.user).await?.is_none() {
        return Err(ApiError::not_found("User"));
    }

    let artist = artists::create_artist(&state.db, &payload.name, &payload.img, payload.user).await?;

    Ok((StatusCode::CREATED, Json(artist.into())))
}

/// PUT /artists/:id
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ArtistPayload>,
) -> Result<StatusCode, ApiError> {
    let mut artist = artists::get_artist(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Artist"))?;

    if users::get_user(&state.db, payload.user).await?.is_none() {
        return Err(ApiError::not_found("User"));
    }

    artist.name = payload.name;
    artist.img = payload.img;
    artist.user_id = payload.user;
    artists::save_artist(&state.db, &artist).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /artists/:id
pub async fn destroy_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !artists::delete_artist(&state.db, id).await? {
        return Err(ApiError::not_found("Artist"));
    }

    Ok(StatusCode::NO_CONTENT)
}
