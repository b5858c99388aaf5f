//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate contains the database and token integrations plus in-memory
//! stores used when no database is configured.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM
//! - `auth` - JWT token validation

pub mod database;
pub mod memory;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use memory::{InMemoryBlogRepository, InMemoryTopicRepository};

#[cfg(feature = "postgres")]
pub use database::DatabaseConnections;

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};
