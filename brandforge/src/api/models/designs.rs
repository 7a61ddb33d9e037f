//! API request/response models for designs.

use crate::db::models::designs::{DesignDBResponse, DesignUpsertDBRequest};
use crate::errors::{Error, Result};
use crate::registry;
use crate::registry::data_config::ContentOverrides;
use crate::types::{AssetType, BrandId, DesignId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Body of `POST /designs`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignUpsert {
    #[schema(value_type = String, format = "uuid")]
    pub id: DesignId,
    #[schema(value_type = String, format = "uuid")]
    pub brand_id: BrandId,
    pub asset_type: AssetType,
    pub style_id: i32,
    pub template_id: i32,
    /// User edits layered over the template defaults at resolution time
    #[serde(default)]
    pub data: ContentOverrides,
}

impl DesignUpsert {
    /// Style and template keys must exist in the registry for this asset type.
    pub fn validate(&self) -> Result<()> {
        if registry::resolve_style(self.asset_type, self.style_id).is_none() {
            return Err(Error::bad_request(format!(
                "unknown styleId {} for asset type {}",
                self.style_id, self.asset_type
            )));
        }
        if registry::resolve_template(self.asset_type, self.template_id).is_none() {
            return Err(Error::bad_request(format!(
                "unknown templateId {} for asset type {}",
                self.template_id, self.asset_type
            )));
        }
        Ok(())
    }

    pub fn into_db_request(self, user_id: UserId) -> DesignUpsertDBRequest {
        DesignUpsertDBRequest {
            id: self.id,
            brand_id: self.brand_id,
            user_id,
            asset_type: self.asset_type.as_str().to_string(),
            style_id: self.style_id,
            template_id: self.template_id,
            data: serde_json::to_value(&self.data).expect("overrides serialize to JSON"),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: DesignId,
    #[schema(value_type = String, format = "uuid")]
    pub brand_id: BrandId,
    pub asset_type: String,
    pub style_id: i32,
    pub template_id: i32,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DesignDBResponse> for DesignResponse {
    fn from(db: DesignDBResponse) -> Self {
        Self {
            id: db.id,
            brand_id: db.brand_id,
            asset_type: db.asset_type,
            style_id: db.style_id,
            template_id: db.template_id,
            data: db.data,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

/// Query parameters for `GET /designs`.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListDesignsQuery {
    #[param(value_type = Option<String>)]
    #[schema(value_type = Option<String>, format = "uuid")]
    pub brand_id: Option<BrandId>,
}

/// Query parameters for `GET /designs/{id}/content`: slide selection for
/// carousel designs, ignored otherwise.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveContentQuery {
    pub slide_index: Option<usize>,
    pub slide_count: Option<usize>,
}
