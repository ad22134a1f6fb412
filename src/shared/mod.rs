//! Shared Module
//!
//! This module contains the types and data structures exchanged with the
//! movie catalog API, plus the configuration and error types used by every
//! other layer of the client.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types with no UI or runtime
//! dependencies. All wire types are designed for JSON serialization and follow
//! the camelCase field names the API uses.

/// Movie records and pagination results
pub mod movie;

/// List query state (search, sort, order, page)
pub mod query;

/// Auth payloads and token claims
pub mod auth;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use movie::{Movie, MoviePage, NewMovie, Pagination};
pub use query::{ListQuery, SortField, SortOrder};
pub use auth::{Credentials, TokenClaims, TokenResponse};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
