//! Data config resolution: merging built-in defaults, per-template entries,
//! and caller-supplied overrides into the content object a renderer consumes.
//!
//! Merge order, later wins: asset-type default → template entry → overrides.
//! Carousels resolve per slide position (first / middle / last), selected by
//! index.

use crate::types::{AssetType, ContentItem};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Partial ContentItem: the shape of user edits and per-template overrides.
/// `None` means "keep whatever the layer below resolved".
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentOverrides {
    pub title: Option<String>,
    pub sub_title: Option<String>,
    pub description: Option<String>,
    pub cta_text: Option<String>,
    pub highlighted_text: Option<String>,
    pub show_brand_mark: Option<bool>,
}

impl ContentOverrides {
    fn apply(&self, base: ContentItem) -> ContentItem {
        ContentItem {
            title: self.title.clone().unwrap_or(base.title),
            sub_title: self.sub_title.clone().unwrap_or(base.sub_title),
            description: self.description.clone().unwrap_or(base.description),
            cta_text: self.cta_text.clone().unwrap_or(base.cta_text),
            highlighted_text: self.highlighted_text.clone().unwrap_or(base.highlighted_text),
            show_brand_mark: self.show_brand_mark.unwrap_or(base.show_brand_mark),
        }
    }

    fn title(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }
}

/// Position of a slide within a carousel, driving which default entry applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlidePosition {
    First,
    Middle,
    Last,
}

impl SlidePosition {
    /// `0 → First`, `count - 1 → Last`, everything between `Middle`.
    /// A single-slide carousel counts as `First`.
    pub fn for_index(index: usize, count: usize) -> Self {
        if index == 0 {
            SlidePosition::First
        } else if index + 1 >= count {
            SlidePosition::Last
        } else {
            SlidePosition::Middle
        }
    }
}

fn item(title: &str, sub_title: &str, description: &str, cta_text: &str, highlighted_text: &str) -> ContentItem {
    ContentItem {
        title: title.to_string(),
        sub_title: sub_title.to_string(),
        description: description.to_string(),
        cta_text: cta_text.to_string(),
        highlighted_text: highlighted_text.to_string(),
        show_brand_mark: true,
    }
}

static DEFAULTS: Lazy<HashMap<AssetType, ContentItem>> = Lazy::new(|| {
    HashMap::from([
        (
            AssetType::SocialBanner,
            item(
                "Your name, your brand",
                "What you do, in one line",
                "Introduce yourself to every profile visitor.",
                "Get in touch",
                "your brand",
            ),
        ),
        (
            AssetType::SocialPost,
            item(
                "Share an insight",
                "A supporting thought",
                "Write the one idea you want your audience to remember today.",
                "Read more",
                "insight",
            ),
        ),
        (
            AssetType::FeaturedPost,
            item(
                "Your flagship content",
                "Why it matters",
                "Pin the work you are proudest of where everyone can see it.",
                "See the work",
                "flagship",
            ),
        ),
        (
            AssetType::QuoteCard,
            item(
                "A quote worth sharing",
                "",
                "Attribute the words that shaped how you work.",
                "",
                "worth sharing",
            ),
        ),
        (
            AssetType::TextimgPost,
            item(
                "Text over image",
                "",
                "Pair a strong statement with a strong visual.",
                "Learn how",
                "strong",
            ),
        ),
        (
            AssetType::MockupPost,
            item(
                "Show your product",
                "In context",
                "Put your work inside a device frame people recognize.",
                "Try it",
                "product",
            ),
        ),
        (
            AssetType::SocialCarousel,
            item(
                "Swipe through",
                "A guide in slides",
                "Break a big idea into steps your audience can follow.",
                "Swipe",
                "guide",
            ),
        ),
    ])
});

static SLIDE_DEFAULTS: Lazy<HashMap<SlidePosition, ContentItem>> = Lazy::new(|| {
    HashMap::from([
        (
            SlidePosition::First,
            item(
                "The hook goes here",
                "Why should they keep swiping?",
                "Open with the promise the rest of the carousel delivers.",
                "",
                "hook",
            ),
        ),
        (
            SlidePosition::Middle,
            item(
                "One idea per slide",
                "",
                "Make a single point, then move on to the next slide.",
                "",
                "One idea",
            ),
        ),
        (
            SlidePosition::Last,
            item(
                "Found this useful?",
                "",
                "Close with what you want the reader to do next.",
                "Follow for more",
                "useful",
            ),
        ),
    ])
});

// Template-specific tweaks on top of the asset defaults. Most templates use
// the defaults untouched, so this table is sparse.
static TEMPLATE_OVERRIDES: Lazy<HashMap<(AssetType, i32), ContentOverrides>> = Lazy::new(|| {
    HashMap::from([
        ((AssetType::SocialBanner, 2), ContentOverrides::title("Name | What you do")),
        (
            (AssetType::SocialPost, 3),
            ContentOverrides {
                cta_text: Some("Save this post".to_string()),
                ..Default::default()
            },
        ),
        (
            (AssetType::QuoteCard, 3),
            ContentOverrides {
                sub_title: Some("— Author".to_string()),
                ..Default::default()
            },
        ),
        (
            (AssetType::SocialCarousel, 3),
            ContentOverrides {
                highlighted_text: Some("checklist".to_string()),
                ..Default::default()
            },
        ),
    ])
});

/// Resolve the content object for a single (non-carousel-positioned) asset.
pub fn resolve(asset: AssetType, template_id: i32, overrides: &ContentOverrides) -> ContentItem {
    let base = DEFAULTS
        .get(&asset)
        .cloned()
        .unwrap_or_default();

    let with_template = match TEMPLATE_OVERRIDES.get(&(asset, template_id)) {
        Some(template) => template.apply(base),
        None => base,
    };

    overrides.apply(with_template)
}

/// Resolve the content object for one slide of a carousel.
pub fn resolve_slide(index: usize, count: usize, template_id: i32, overrides: &ContentOverrides) -> ContentItem {
    let position = SlidePosition::for_index(index, count);
    let base = SLIDE_DEFAULTS
        .get(&position)
        .cloned()
        .unwrap_or_default();

    let with_template = match TEMPLATE_OVERRIDES.get(&(AssetType::SocialCarousel, template_id)) {
        Some(template) => template.apply(base),
        None => base,
    };

    overrides.apply(with_template)
}
