//! Repository implementations for database access.
//!
//! Each repository wraps a `&mut PgConnection`, provides strongly-typed
//! operations for one table, handles query construction and parameter
//! binding, and returns domain models from [`crate::db::models`].
//!
//! The repositories deliberately differ in surface, matching their tables'
//! access patterns:
//!
//! - [`Users`]: create / read / profile update (no delete path exposed)
//! - [`GeneratedContent`]: insert-only log with ownership-checked reads
//! - [`Brands`], [`Designs`]: upsert-by-id plus owner-scoped reads
//!
//! All write operations run on the connection handed in; callers that need
//! multi-statement atomicity pass a transaction connection.

pub mod brands;
pub mod designs;
pub mod generated_content;
pub mod users;

pub use brands::Brands;
pub use designs::Designs;
pub use generated_content::GeneratedContent;
pub use users::Users;
