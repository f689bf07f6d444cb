//! artparty-api library - art-portfolio HTTP service
//!
//! CRUD endpoints for Users, Artists, Artworks, Tags and the ArtworkTag
//! join rows linking artworks to tags, plus a small auth bridge used by the
//! frontend's external login flow.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get, post, put};

    Router::new()
        .route("/health", get(api::health::health))
        // Users
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::retrieve_user))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::destroy_user))
        // Artists
        .route("/artists", get(api::artists::list_artists))
        .route("/artists", post(api::artists::create_artist))
        .route("/artists/:id", get(api::artists::retrieve_artist))
        .route("/artists/:id", put(api::artists::update_artist))
        .route("/artists/:id", delete(api::artists::destroy_artist))
        // Artworks
        .route("/artworks", get(api::artworks::list_artworks))
        .route("/artworks", post(api::artworks::create_artwork))
        .route("/artworks/:id", get(api::artworks::retrieve_artwork))
        .route("/artworks/:id", put(api::artworks::update_artwork))
        .route("/artworks/:id", delete(api::artworks::destroy_artwork))
        .route("/artworks/:id/add_artwork_tag", post(api::artworks::add_artwork_tag))
        .route("/artworks/:id/remove_artwork_tag", delete(api::artworks::remove_artwork_tag))
        // ArtworkTags
        .route("/artworktags", get(api::artworktags::list_artwork_tags))
        .route("/artworktags", post(api::artworktags::create_artwork_tag))
        .route("/artworktags/:id", get(api::artworktags::retrieve_artwork_tag))
        .route("/artworktags/:id", delete(api::artworktags::destroy_artwork_tag))
        // Tags (no update/delete - shared vocabulary only grows)
        .route("/tags", get(api::tags::list_tags))
        .route("/tags", post(api::tags::create_tag))
        .route("/tags/:id", get(api::tags::retrieve_tag))
        // Auth bridge
        .route("/auth/check_user", post(api::auth::check_user))
        .route("/auth/register_user", post(api::auth::register_user))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
