//! HTTP handlers for artworks
//!
//! The artwork surface carries the interesting behavior: optional list
//! filters with hard-failing reference validation, tag attachment on create,
//! tag reconciliation on update, and the two single-join custom actions.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::api::artists::ArtistResponse;
use crate::api::artworktags::ArtworkTagResponse;
use crate::api::users::UserResponse;
use crate::api::ApiError;
use crate::db::artworks::{self, Artwork, ArtworkFilter, NewArtwork};
use crate::db::{artists, artwork_tags, tags, users};
use crate::AppState;

/// Serialized artwork with `user` and `artist` expanded one level and the
/// computed `tags` array
#[derive(Debug, Serialize)]
pub struct ArtworkResponse {
    pub id: i64,
    pub user: UserResponse,
    pub artist: ArtistResponse,
    pub title: String,
    pub img: String,
    pub medium: String,
    pub description: String,
    pub date: String,
    pub age: i64,
    pub featured: bool,
    pub tags: Vec<ArtworkTagResponse>,
}

#[derive(Debug, Deserialize)]
pub struct CreateArtworkPayload {
    pub title: String,
    pub img: String,
    pub medium: String,
    pub description: String,
    pub date: String,
    pub age: i64,
    #[serde(default)]
    pub featured: bool,
    pub user: i64,
    pub artist: i64,
    /// Tag ids to attach after the artwork row is created
    pub tags: Option<Vec<i64>>,
}

/// Partial update: only fields present in the payload are applied
#[derive(Debug, Deserialize)]
pub struct UpdateArtworkPayload {
    pub title: Option<String>,
    pub img: Option<String>,
    pub medium: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub age: Option<i64>,
    pub featured: Option<bool>,
    pub user: Option<i64>,
    pub artist: Option<i64>,
    /// Target tag-id set for reconciliation
    pub tags: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
pub struct ArtworkListQuery {
    pub user: Option<i64>,
    pub artist: Option<i64>,
    /// Matches artworks whose flag equals `value.eq_ignore_ascii_case("true")`
    pub featured: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddArtworkTagPayload {
    pub tag: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveArtworkTagPayload {
    /// Id of the join row to remove (not a tag id)
    pub artwork_tag: Option<i64>,
}

fn validate_date(date: &str) -> Result<(), ApiError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| ApiError::BadRequest(format!("Invalid date: {}", date)))
}

/// Assemble the full response shape for one artwork
async fn artwork_response(pool: &SqlitePool, artwork: Artwork) -> Result<ArtworkResponse, ApiError> {
    let user = users::get_user(pool, artwork.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;
    let artist = artists::get_artist(pool, artwork.artist_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Artist"))?;
    let joins = artwork_tags::tags_for_artwork(pool, artwork.id).await?;

    Ok(ArtworkResponse {
        id: artwork.id,
        user: user.into(),
        artist: artist.into(),
        title: artwork.title,
        img: artwork.img,
        medium: artwork.medium,
        description: artwork.description,
        date: artwork.date,
        age: artwork.age,
        featured: artwork.featured,
        tags: joins.into_iter().map(ArtworkTagResponse::from).collect(),
    })
}

/// GET /artworks?user=ID&artist=ID&featured=BOOL
///
/// Filters compose with AND. A dangling `user` or `artist` id is a 404, not
/// an empty list; `featured` is the literal string "true" compared
/// case-insensitively.
pub async fn list_artworks(
    State(state): State<AppState>,
    Query(query): Query<ArtworkListQuery>,
) -> Result<Json<Vec<ArtworkResponse>>, ApiError> {
    if let Some(user_id) = query.user {
        if users::get_user(&state.db, user_id).await?.is_none() {
            return Err(ApiError::not_found("User"));
        }
    }
    if let Some(artist_id) = query.artist {
        if artists::get_artist(&state.db, artist_id).await?.is_none() {
            return Err(ApiError::not_found("Artist"));
        }
    }

    let filter = ArtworkFilter {
        user_id: query.user,
        artist_id: query.artist,
        featured: query.featured.map(|v| v.eq_ignore_ascii_case("true")),
    };

    let artworks = artworks::list_artworks(&state.db, &filter).await?;
    let mut responses = Vec::with_capacity(artworks.len());
    for artwork in artworks {
        responses.push(artwork_response(&state.db, artwork).await?);
    }

    Ok(Json(responses))
}

/// GET /artworks/:id
pub async fn retrieve_artwork(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ArtworkResponse>, ApiError> {
    let artwork = artworks::get_artwork(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Artwork"))?;

    Ok(Json(artwork_response(&state.db, artwork).await?))
}

/// POST /artworks
///
/// Tag attachment resolves each id strictly and runs after the artwork row
/// is committed; a missing tag id aborts with 404 and leaves the artwork and
/// any join rows created so far in place. That partial-commit behavior is
/// part of the create contract, so no transaction here.
pub async fn create_artwork(
    State(state): State<AppState>,
    Json(payload): Json<CreateArtworkPayload>,
) -> Result<(StatusCode, Json<ArtworkResponse>), ApiError> {
    validate_date(&payload.date)?;

    if users::get_user(&state.db, payload.user).await?.is_none() {
        return Err(ApiError::not_found("User"));
    }
    if artists::get_artist(&state.db, payload.artist).await?.is_none() {
        return Err(ApiError::not_found("Artist"));
    }

    let artwork = artworks::create_artwork(
        &state.db,
        &NewArtwork {
            title: payload.title,
            img: payload.img,
            medium: payload.medium,
            description: payload.description,
            date: payload.date,
            age: payload.age,
            featured: payload.featured,
            user_id: payload.user,
            artist_id: payload.artist,
        },
    )
    .await?;

    if let Some(tag_ids) = payload.tags {
        for tag_id in tag_ids {
            if tags::get_tag(&state.db, tag_id).await?.is_none() {
                return Err(ApiError::not_found("Tag"));
            }
            artwork_tags::create_artwork_tag(&state.db, artwork.id, tag_id).await?;
        }
    }

    let response = artwork_response(&state.db, artwork).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /artworks/:id
///
/// Partial update; a `tags` field reconciles the artwork's joined tag set to
/// the given target.
pub async fn update_artwork(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArtworkPayload>,
) -> Result<StatusCode, ApiError> {
    let mut artwork = artworks::get_artwork(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Artwork"))?;

    if let Some(date) = &payload.date {
        validate_date(date)?;
    }
    if let Some(user_id) = payload.user {
        if users::get_user(&state.db, user_id).await?.is_none() {
            return Err(ApiError::not_found("User"));
        }
        artwork.user_id = user_id;
    }
    if let Some(artist_id) = payload.artist {
        if artists::get_artist(&state.db, artist_id).await?.is_none() {
            return Err(ApiError::not_found("Artist"));
        }
        artwork.artist_id = artist_id;
    }

    if let Some(title) = payload.title {
        artwork.title = title;
    }
    if let Some(img) = payload.img {
        artwork.img = img;
    }
    if let Some(medium) = payload.medium {
        artwork.medium = medium;
    }
    if let Some(description) = payload.description {
        artwork.description = description;
    }
    if let Some(date) = payload.date {
        artwork.date = date;
    }
    if let Some(age) = payload.age {
        artwork.age = age;
    }
    if let Some(featured) = payload.featured {
        artwork.featured = featured;
    }

    artworks::save_artwork(&state.db, &artwork).await?;

    if let Some(target) = payload.tags {
        artwork_tags::reconcile_tags(&state.db, artwork.id, &target).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /artworks/:id
pub async fn destroy_artwork(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !artworks::delete_artwork(&state.db, id).await? {
        return Err(ApiError::not_found("Artwork"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /artworks/:id/add_artwork_tag
pub async fn add_artwork_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AddArtworkTagPayload>,
) -> Result<(StatusCode, Json<ArtworkTagResponse>), ApiError> {
    let tag_id = payload
        .tag
        .ok_or_else(|| ApiError::BadRequest("Missing required parameter: tag".to_string()))?;

    if artworks::get_artwork(&state.db, id).await?.is_none() {
        return Err(ApiError::not_found("Artwork"));
    }
    let tag = tags::get_tag(&state.db, tag_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Tag"))?;

    let join_id = artwork_tags::create_artwork_tag(&state.db, id, tag_id).await?;

    let response = ArtworkTagResponse {
        id: join_id,
        artwork: id,
        tag: tag.into(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// DELETE /artworks/:id/remove_artwork_tag
///
/// The body names the join row to remove by its own id, not by tag id.
pub async fn remove_artwork_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RemoveArtworkTagPayload>,
) -> Result<StatusCode, ApiError> {
    let join_id = payload.artwork_tag.ok_or_else(|| {
        ApiError::BadRequest("Missing required parameter: artwork_tag".to_string())
    })?;

    if artworks::get_artwork(&state.db, id).await?.is_none() {
        return Err(ApiError::not_found("Artwork"));
    }
    if !artwork_tags::delete_artwork_tag(&state.db, join_id).await? {
        return Err(ApiError::not_found("ArtworkTag"));
    }

    Ok(StatusCode::NO_CONTENT)
}
