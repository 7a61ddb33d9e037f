//! HTTP request handlers for all API endpoints.
//!
//! Each handler is responsible for:
//! - Request validation and deserialization
//! - Authentication / identity resolution
//! - Business logic execution via services and database repositories
//! - Response serialization
//!
//! # Handler Modules
//!
//! - [`generate`]: AI copy generation and stored-record retrieval
//! - [`variants`]: asset-variant (bento) generation via the external worker
//! - [`hooks`]: post hook generation
//! - [`users`]: profile retrieval and updates
//! - [`brands`]: brand upsert/list/read
//! - [`designs`]: design upsert/list/read and content resolution
//! - [`templates`]: style/template registry catalog
//!
//! # Error Handling
//!
//! Handlers return [`crate::errors::Error`] which automatically converts to
//! the appropriate HTTP status code and the standard error envelope.

pub mod brands;
pub mod designs;
pub mod generate;
pub mod hooks;
pub mod templates;
pub mod users;
pub mod variants;
