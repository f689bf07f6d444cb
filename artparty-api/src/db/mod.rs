//! Database access layer for artparty-api
//!
//! One module per entity, each a set of plain async functions over the
//! shared `SqlitePool`. Handlers own request validation; this layer owns
//! SQL and row mapping.

pub mod artists;
pub mod artwork_tags;
pub mod artworks;
pub mod tags;
pub mod users;
