//! Database models for brands.

use crate::types::{BrandId, UserId};
use chrono::{DateTime, Utc};

/// Database request for creating or replacing a brand.
///
/// Brands are upserted by id: the client owns the identifier so the same
/// request shape covers both first save and subsequent edits.
#[derive(Debug, Clone)]
pub struct BrandUpsertDBRequest {
    pub id: BrandId,
    pub user_id: UserId,
    pub name: String,
    /// Colors, fonts and layout preferences as stored by the editor
    pub config: serde_json::Value,
    pub social_links: serde_json::Value,
    pub brand_mark: serde_json::Value,
}

/// Database response for a brand
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BrandDBResponse {
    pub id: BrandId,
    pub user_id: UserId,
    pub name: String,
    pub config: serde_json::Value,
    pub social_links: serde_json::Value,
    pub brand_mark: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
