//! Database models for generated content records.

use crate::types::{GeneratedContentId, TempUserId, UserId};
use chrono::{DateTime, Utc};

/// Database request for recording a generation result.
///
/// At least one of `user_id` / `temp_user_id` must be present; the table
/// enforces this with a CHECK constraint.
#[derive(Debug, Clone)]
pub struct GeneratedContentCreateDBRequest {
    pub user_id: Option<UserId>,
    pub temp_user_id: Option<TempUserId>,
    pub keywords: Vec<String>,
    /// Tag identifying which flow produced the record (an asset type,
    /// `"asset-variants"`, or `"post-hooks"`)
    pub prompt_type: String,
    pub generated_text: serde_json::Value,
    /// Name of the generation backend used (a model name, or `"fallback"`)
    pub model: String,
}

/// Database response for a generated content record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GeneratedContentDBResponse {
    pub id: GeneratedContentId,
    pub user_id: Option<UserId>,
    pub temp_user_id: Option<TempUserId>,
    pub keywords: Vec<String>,
    pub prompt_type: String,
    pub generated_text: serde_json::Value,
    pub model: String,
    pub created_at: DateTime<Utc>,
}
