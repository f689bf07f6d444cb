//! HTTP API handlers for artparty-api

pub mod artists;
pub mod artworks;
pub mod artworktags;
pub mod auth;
pub mod error;
pub mod health;
pub mod tags;
pub mod users;

pub use error::ApiError;
