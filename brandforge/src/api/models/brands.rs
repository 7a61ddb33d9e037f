//! API request/response models for brands.

use crate::db::models::brands::{BrandDBResponse, BrandUpsertDBRequest};
use crate::errors::{Error, Result};
use crate::types::{BrandId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /brands`: the client owns the id, so saving and editing
/// use the same shape.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandUpsert {
    #[schema(value_type = String, format = "uuid")]
    pub id: BrandId,
    pub name: String,
    /// Colors, fonts and layout preferences as stored by the editor
    #[serde(default)]
    #[schema(value_type = Object)]
    pub config: serde_json::Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub social_links: serde_json::Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub brand_mark: serde_json::Value,
}

impl BrandUpsert {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::bad_request("brand name must not be empty"));
        }
        Ok(())
    }

    pub fn into_db_request(self, user_id: UserId) -> BrandUpsertDBRequest {
        BrandUpsertDBRequest {
            id: self.id,
            user_id,
            name: self.name,
            config: self.config,
            social_links: self.social_links,
            brand_mark: self.brand_mark,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: BrandId,
    pub name: String,
    #[schema(value_type = Object)]
    pub config: serde_json::Value,
    #[schema(value_type = Object)]
    pub social_links: serde_json::Value,
    #[schema(value_type = Object)]
    pub brand_mark: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BrandDBResponse> for BrandResponse {
    fn from(db: BrandDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            config: db.config,
            social_links: db.social_links,
            brand_mark: db.brand_mark,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
