//! # Artparty Common Library
//!
//! Shared code for the artparty service crates:
//! - Error types
//! - Configuration loading
//! - Database initialization and schema

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
