//! API models for the AI copy generation endpoints.

use crate::db::models::generated_content::GeneratedContentDBResponse;
use crate::errors::{Error, Result};
use crate::types::{AssetType, GeneratedContentId, TempUserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const MIN_SLIDES: u8 = 1;
pub const MAX_SLIDES: u8 = 10;

/// Body of `POST /generate-ai-text`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub asset_type: AssetType,
    pub keywords: Vec<String>,
    /// Required for carousels, ignored for every other asset type
    pub number_of_slides: Option<u8>,
    /// Anonymous identity for callers without a session
    #[schema(value_type = Option<String>, format = "uuid")]
    pub temp_user_id: Option<TempUserId>,
}

impl GenerateContentRequest {
    /// Request-shape validation; the only errors this endpoint ever surfaces.
    pub fn validate(&self) -> Result<()> {
        if !self.keywords.iter().any(|k| !k.trim().is_empty()) {
            return Err(Error::bad_request("at least one keyword is required"));
        }

        if self.asset_type.is_carousel() {
            match self.number_of_slides {
                None => {
                    return Err(Error::bad_request("numberOfSlides is required for carousel assets"));
                }
                Some(n) if !(MIN_SLIDES..=MAX_SLIDES).contains(&n) => {
                    return Err(Error::bad_request(format!(
                        "numberOfSlides must be between {MIN_SLIDES} and {MAX_SLIDES}"
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// Slide count as used by generation: present only for carousels.
    pub fn effective_slides(&self) -> Option<u8> {
        if self.asset_type.is_carousel() {
            self.number_of_slides
        } else {
            None
        }
    }
}

/// Query parameters for `GET /generate-ai-text`.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct GetContentQuery {
    /// Record id to fetch
    #[param(value_type = String)]
    #[schema(value_type = String, format = "uuid")]
    pub id: GeneratedContentId,
}

/// A stored generation record with its parsed content.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContentResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: GeneratedContentId,
    pub keywords: Vec<String>,
    pub prompt_type: String,
    #[schema(value_type = Object)]
    pub content: serde_json::Value,
    pub model: String,
    pub created_at: DateTime<Utc>,
}

impl From<GeneratedContentDBResponse> for GeneratedContentResponse {
    fn from(db: GeneratedContentDBResponse) -> Self {
        Self {
            id: db.id,
            keywords: db.keywords,
            prompt_type: db.prompt_type,
            content: db.generated_text,
            model: db.model,
            created_at: db.created_at,
        }
    }
}

/// Body of `POST /posts/generate-hooks`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateHooksRequest {
    /// Free text or a URL to write hooks for
    pub input: String,
}

impl GenerateHooksRequest {
    pub fn validate(&self) -> Result<()> {
        if self.input.trim().is_empty() {
            return Err(Error::bad_request("input must not be empty"));
        }
        Ok(())
    }
}
