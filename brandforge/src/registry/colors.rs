//! Brand-color templating.
//!
//! String fields in styles and resolved content may embed placeholders
//! (`{{primaryColor}}`, `{{secondaryColor}}`, `{{accentColor}}`) that are
//! substituted with a brand's configured colors at resolution time.

use crate::types::ContentItem;

const DEFAULT_PRIMARY: &str = "#1d4ed8";
const DEFAULT_SECONDARY: &str = "#9333ea";
const DEFAULT_ACCENT: &str = "#f59e0b";

/// The three colors a brand configures in its editor.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            secondary: DEFAULT_SECONDARY.to_string(),
            accent: DEFAULT_ACCENT.to_string(),
        }
    }
}

impl BrandColors {
    /// Read colors out of a brand's `config` JSON, falling back to the
    /// defaults for anything missing or non-string.
    pub fn from_config(config: &serde_json::Value) -> Self {
        let read = |key: &str, fallback: &str| {
            config
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or(fallback)
                .to_string()
        };

        Self {
            primary: read("primaryColor", DEFAULT_PRIMARY),
            secondary: read("secondaryColor", DEFAULT_SECONDARY),
            accent: read("accentColor", DEFAULT_ACCENT),
        }
    }
}

/// Replace all color placeholders in `text`.
pub fn substitute(text: &str, colors: &BrandColors) -> String {
    text.replace("{{primaryColor}}", &colors.primary)
        .replace("{{secondaryColor}}", &colors.secondary)
        .replace("{{accentColor}}", &colors.accent)
}

/// Substitute placeholders in every string field of a content item.
pub fn substitute_item(item: ContentItem, colors: &BrandColors) -> ContentItem {
    ContentItem {
        title: substitute(&item.title, colors),
        sub_title: substitute(&item.sub_title, colors),
        description: substitute(&item.description, colors),
        cta_text: substitute(&item.cta_text, colors),
        highlighted_text: substitute(&item.highlighted_text, colors),
        show_brand_mark: item.show_brand_mark,
    }
}
