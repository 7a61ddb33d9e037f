//! Database models for designs.

use crate::types::{BrandId, DesignId, UserId};
use chrono::{DateTime, Utc};

/// Database request for creating or replacing a design.
///
/// Like brands, designs are upserted by client-owned id.
#[derive(Debug, Clone)]
pub struct DesignUpsertDBRequest {
    pub id: DesignId,
    pub brand_id: BrandId,
    pub user_id: UserId,
    pub asset_type: String,
    pub style_id: i32,
    pub template_id: i32,
    /// Partial ContentItem overrides applied on top of template defaults
    pub data: serde_json::Value,
}

/// Database response for a design
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DesignDBResponse {
    pub id: DesignId,
    pub brand_id: BrandId,
    pub user_id: UserId,
    pub asset_type: String,
    pub style_id: i32,
    pub template_id: i32,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
