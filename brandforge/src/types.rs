//! Common type definitions shared across the service.
//!
//! This module defines:
//! - Type aliases for entity IDs (UserId, BrandId, etc.)
//! - The fixed set of creative asset formats ([`AssetType`])
//! - The generated creative payload ([`ContentItem`])
//! - User plan and onboarding state enums
//!
//! All entity IDs are UUIDs wrapped in type aliases for better type safety.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

// Type aliases for IDs
pub type UserId = Uuid;
pub type BrandId = Uuid;
pub type DesignId = Uuid;
pub type GeneratedContentId = Uuid;
/// Client-generated UUID identifying an anonymous session before sign-up.
pub type TempUserId = Uuid;

/// Abbreviate a UUID to its first 8 characters for more readable logs and traces
/// Example: "550e8400-e29b-41d4-a716-446655440000" -> "550e8400"
pub fn abbrev_uuid(uuid: &Uuid) -> String {
    uuid.to_string().chars().take(8).collect()
}

/// The seven creative formats the service can generate content for.
///
/// Serialized kebab-case on the wire (`"social-banner"`, `"quote-card"`, ...)
/// and stored the same way in the `designs.asset_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AssetType {
    SocialBanner,
    SocialPost,
    FeaturedPost,
    QuoteCard,
    TextimgPost,
    MockupPost,
    SocialCarousel,
}

impl AssetType {
    pub const ALL: [AssetType; 7] = [
        AssetType::SocialBanner,
        AssetType::SocialPost,
        AssetType::FeaturedPost,
        AssetType::QuoteCard,
        AssetType::TextimgPost,
        AssetType::MockupPost,
        AssetType::SocialCarousel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::SocialBanner => "social-banner",
            AssetType::SocialPost => "social-post",
            AssetType::FeaturedPost => "featured-post",
            AssetType::QuoteCard => "quote-card",
            AssetType::TextimgPost => "textimg-post",
            AssetType::MockupPost => "mockup-post",
            AssetType::SocialCarousel => "social-carousel",
        }
    }

    /// Carousels are the only multi-item format; everything else yields a
    /// single ContentItem per generation.
    pub fn is_carousel(&self) -> bool {
        matches!(self, AssetType::SocialCarousel)
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("unknown asset type: {s}"))
    }
}

/// The structured text payload rendered into a visual template.
///
/// Field length bounds (title 60, subTitle 80, description 200, ctaText 30,
/// highlightedText 40) are enforced by the LLM response schema at generation
/// time, not re-validated after parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub title: String,
    #[serde(default)]
    pub sub_title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cta_text: String,
    #[serde(default)]
    pub highlighted_text: String,
    /// Always forced false for AI-generated content.
    #[serde(default)]
    pub show_brand_mark: bool,
}

/// Maximum field lengths enforced by the generation response schema.
pub mod content_limits {
    pub const TITLE: usize = 60;
    pub const SUB_TITLE: usize = 80;
    pub const DESCRIPTION: usize = 200;
    pub const CTA_TEXT: usize = 30;
    pub const HIGHLIGHTED_TEXT: usize = 40;
}

/// Billing plan of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_plan", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Pro,
}

/// Onboarding progress; transitioning to COMPLETE triggers the mailing-list
/// subscription side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "onboarding_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum OnboardingStatus {
    Pending,
    Complete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_type_round_trips_kebab_case() {
        for asset in AssetType::ALL {
            let json = serde_json::to_string(&asset).unwrap();
            assert_eq!(json, format!("\"{}\"", asset.as_str()));
            let back: AssetType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, asset);
            assert_eq!(asset.as_str().parse::<AssetType>().unwrap(), asset);
        }
    }

    #[test]
    fn unknown_asset_type_is_rejected() {
        let result = serde_json::from_str::<AssetType>("\"video-reel\"");
        assert!(result.is_err());
        assert!("video-reel".parse::<AssetType>().is_err());
    }

    #[test]
    fn content_item_uses_camel_case_field_names() {
        let item = ContentItem {
            title: "T".to_string(),
            sub_title: "S".to_string(),
            description: "D".to_string(),
            cta_text: "C".to_string(),
            highlighted_text: "H".to_string(),
            show_brand_mark: false,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["subTitle"], "S");
        assert_eq!(value["ctaText"], "C");
        assert_eq!(value["highlightedText"], "H");
        assert_eq!(value["showBrandMark"], false);
    }
}
