//! Static style and template registry.
//!
//! Maps `(asset type, style key)` to a visual configuration and
//! `(asset type, template id)` to a renderer reference. The tables are
//! hand-authored, built once at first use, and never mutated; lookups for
//! unknown keys return `None` and callers decide what absence means
//! (typically conditional rendering on the client, a 400 on design upsert).

pub mod colors;
pub mod data_config;

use crate::types::AssetType;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Visual theme for an asset: background, highlight-button treatment, and
/// backdrop decorations. String fields may carry brand-color placeholders
/// (`{{primaryColor}}` etc.) substituted at render time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    pub background: &'static str,
    pub highlight_button: &'static str,
    pub backdrops: &'static [Backdrop],
}

/// A single decorative element layered behind the content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Backdrop {
    pub shape: &'static str,
    pub position: &'static str,
    pub color: &'static str,
}

/// Reference to a layout/component variant within an asset type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRef {
    /// Renderer component identifier consumed by the client
    pub component: &'static str,
    /// Human-readable name shown in the template picker
    pub name: &'static str,
}

const SOLID_PRIMARY: &str = "{{primaryColor}}";
const GRADIENT_PRIMARY: &str = "linear-gradient(135deg, {{primaryColor}} 0%, {{secondaryColor}} 100%)";
const GRADIENT_DARK: &str = "linear-gradient(180deg, #0f172a 0%, {{primaryColor}} 140%)";
const PAPER: &str = "#f8fafc";

const DOTS_TOP_RIGHT: Backdrop = Backdrop {
    shape: "dot-grid",
    position: "top-right",
    color: "{{accentColor}}",
};
const RING_BOTTOM_LEFT: Backdrop = Backdrop {
    shape: "ring",
    position: "bottom-left",
    color: "{{secondaryColor}}",
};
const BLOB_CENTER: Backdrop = Backdrop {
    shape: "blob",
    position: "center",
    color: "{{primaryColor}}",
};

static STYLES: Lazy<HashMap<(AssetType, i32), StyleConfig>> = Lazy::new(|| {
    let mut table = HashMap::new();

    let mut insert = |asset: AssetType, entries: Vec<StyleConfig>| {
        for (idx, style) in entries.into_iter().enumerate() {
            table.insert((asset, idx as i32 + 1), style);
        }
    };

    let flat = StyleConfig {
        background: SOLID_PRIMARY,
        highlight_button: "{{accentColor}}",
        backdrops: &[],
    };
    let gradient = StyleConfig {
        background: GRADIENT_PRIMARY,
        highlight_button: "#ffffff",
        backdrops: &[DOTS_TOP_RIGHT],
    };
    let dark = StyleConfig {
        background: GRADIENT_DARK,
        highlight_button: "{{accentColor}}",
        backdrops: &[RING_BOTTOM_LEFT],
    };
    let light = StyleConfig {
        background: PAPER,
        highlight_button: "{{primaryColor}}",
        backdrops: &[BLOB_CENTER, DOTS_TOP_RIGHT],
    };

    insert(
        AssetType::SocialBanner,
        vec![flat.clone(), gradient.clone(), dark.clone(), light.clone()],
    );
    insert(
        AssetType::SocialPost,
        vec![gradient.clone(), flat.clone(), light.clone(), dark.clone()],
    );
    insert(AssetType::FeaturedPost, vec![gradient.clone(), dark.clone(), light.clone()]);
    insert(AssetType::QuoteCard, vec![light.clone(), dark.clone(), flat.clone()]);
    insert(AssetType::TextimgPost, vec![flat.clone(), light.clone()]);
    insert(AssetType::MockupPost, vec![light.clone(), gradient.clone()]);
    insert(AssetType::SocialCarousel, vec![gradient, dark, flat, light]);

    table
});

static TEMPLATES: Lazy<HashMap<(AssetType, i32), TemplateRef>> = Lazy::new(|| {
    let mut table = HashMap::new();

    let mut insert = |asset: AssetType, entries: &[(&'static str, &'static str)]| {
        for (idx, (component, name)) in entries.iter().enumerate() {
            table.insert((asset, idx as i32 + 1), TemplateRef { component, name });
        }
    };

    insert(
        AssetType::SocialBanner,
        &[
            ("banner-headline", "Headline"),
            ("banner-split", "Split"),
            ("banner-centered", "Centered"),
        ],
    );
    insert(
        AssetType::SocialPost,
        &[
            ("post-classic", "Classic"),
            ("post-bold-title", "Bold title"),
            ("post-cta-footer", "CTA footer"),
            ("post-minimal", "Minimal"),
        ],
    );
    insert(
        AssetType::FeaturedPost,
        &[("featured-hero", "Hero"), ("featured-side-image", "Side image")],
    );
    insert(
        AssetType::QuoteCard,
        &[
            ("quote-serif", "Serif"),
            ("quote-highlight", "Highlight"),
            ("quote-attribution", "Attribution"),
        ],
    );
    insert(
        AssetType::TextimgPost,
        &[("textimg-overlay", "Overlay"), ("textimg-caption", "Caption")],
    );
    insert(
        AssetType::MockupPost,
        &[("mockup-phone", "Phone"), ("mockup-browser", "Browser")],
    );
    insert(
        AssetType::SocialCarousel,
        &[
            ("carousel-numbered", "Numbered"),
            ("carousel-story", "Story"),
            ("carousel-checklist", "Checklist"),
        ],
    );

    table
});

/// Look up the visual configuration for `(asset type, style key)`.
pub fn resolve_style(asset: AssetType, style_key: i32) -> Option<&'static StyleConfig> {
    STYLES.get(&(asset, style_key))
}

/// Look up the renderer reference for `(asset type, template id)`.
pub fn resolve_template(asset: AssetType, template_id: i32) -> Option<&'static TemplateRef> {
    TEMPLATES.get(&(asset, template_id))
}

/// All styles registered for an asset type, ordered by key.
pub fn styles_for(asset: AssetType) -> Vec<(i32, &'static StyleConfig)> {
    let mut styles: Vec<_> = STYLES
        .iter()
        .filter(|((a, _), _)| *a == asset)
        .map(|((_, key), style)| (*key, style))
        .collect();
    styles.sort_by_key(|(key, _)| *key);
    styles
}

/// All templates registered for an asset type, ordered by id.
pub fn templates_for(asset: AssetType) -> Vec<(i32, &'static TemplateRef)> {
    let mut templates: Vec<_> = TEMPLATES
        .iter()
        .filter(|((a, _), _)| *a == asset)
        .map(|((_, id), template)| (*id, template))
        .collect();
    templates.sort_by_key(|(id, _)| *id);
    templates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_asset_type_has_styles_and_templates() {
        for asset in AssetType::ALL {
            assert!(!styles_for(asset).is_empty(), "no styles for {asset}");
            assert!(!templates_for(asset).is_empty(), "no templates for {asset}");
        }
    }

    #[test]
    fn keys_start_at_one_and_are_contiguous() {
        for asset in AssetType::ALL {
            for (expected, (key, _)) in styles_for(asset).iter().enumerate() {
                assert_eq!(*key, expected as i32 + 1);
            }
            for (expected, (id, _)) in templates_for(asset).iter().enumerate() {
                assert_eq!(*id, expected as i32 + 1);
            }
        }
    }

    #[test]
    fn unknown_keys_resolve_to_none() {
        assert!(resolve_style(AssetType::QuoteCard, 0).is_none());
        assert!(resolve_style(AssetType::QuoteCard, 99).is_none());
        assert!(resolve_template(AssetType::SocialBanner, -1).is_none());
    }

    #[test]
    fn known_keys_resolve() {
        let style = resolve_style(AssetType::QuoteCard, 1).unwrap();
        assert!(!style.background.is_empty());

        let template = resolve_template(AssetType::SocialCarousel, 2).unwrap();
        assert_eq!(template.component, "carousel-story");
    }
}
