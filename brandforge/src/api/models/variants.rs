//! API models for the asset-variant (bento) generation endpoints.

use crate::db::models::generated_content::GeneratedContentDBResponse;
use crate::errors::{Error, Result};
use crate::types::{GeneratedContentId, TempUserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Tag identifying the asset-variants flow in stored records.
pub const ASSET_VARIANTS_PROMPT_TYPE: &str = "asset-variants";

/// Body of `POST /generate-text`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVariantsRequest {
    pub what_do_you_offer: String,
    pub who_do_you_help: String,
    /// Flow tag; only `"asset-variants"` is supported
    pub prompt_type: Option<String>,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub temp_user_id: Option<TempUserId>,
}

impl GenerateVariantsRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(prompt_type) = &self.prompt_type
            && prompt_type != ASSET_VARIANTS_PROMPT_TYPE
        {
            return Err(Error::bad_request(format!("unsupported promptType: {prompt_type}")));
        }
        if self.what_do_you_offer.trim().is_empty() {
            return Err(Error::bad_request("whatDoYouOffer must not be empty"));
        }
        if self.who_do_you_help.trim().is_empty() {
            return Err(Error::bad_request("whoDoYouHelp must not be empty"));
        }
        Ok(())
    }
}

/// Response of `POST /generate-text`: the persisted id plus the worker's
/// variant bundles, passed through unmodified.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariantsResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: GeneratedContentId,
    #[schema(value_type = Object)]
    pub asset_variants: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl From<GeneratedContentDBResponse> for VariantsResponse {
    fn from(db: GeneratedContentDBResponse) -> Self {
        Self {
            id: db.id,
            asset_variants: db.generated_text,
            created_at: db.created_at,
        }
    }
}

/// Query parameters for `GET /generate-text`: the user or temp id to look
/// up, for callers without a session.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct LatestContentQuery {
    #[param(value_type = Option<String>)]
    pub id: Option<Uuid>,
}
