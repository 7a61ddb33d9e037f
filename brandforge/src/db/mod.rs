//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL.
//! It follows the Repository pattern to provide clean abstractions over database operations.
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations for each table
//! - [`models`]: Database record structures matching table schemas
//! - [`errors`]: Database-specific error types
//!
//! # Migrations
//!
//! Database migrations are managed by SQLx and located in the `migrations/`
//! directory. The [`crate::migrator`] function provides access to the migrator:
//!
//! ```ignore
//! brandforge::migrator().run(&pool).await?;
//! ```

pub mod errors;
pub mod handlers;
pub mod models;
