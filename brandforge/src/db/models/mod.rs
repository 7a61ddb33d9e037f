//! Database record structures matching table schemas.
//!
//! Each entity has up to three shapes, mirroring the request/response split
//! used at the API layer:
//!
//! - `*CreateDBRequest` / `*UpsertDBRequest`: what a repository needs to write a row
//! - `*UpdateDBRequest`: partial updates (COALESCE semantics)
//! - `*DBResponse`: the row as read back from the database

pub mod brands;
pub mod designs;
pub mod generated_content;
pub mod users;
