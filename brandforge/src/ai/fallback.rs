//! Deterministic mock content used when the generation backend fails.
//!
//! Everything here is synthesized from the request inputs alone, so the
//! caller always receives a structurally valid result with the same shape
//! the model would have produced.

use crate::ai::Hook;
use crate::types::{AssetType, ContentItem, content_limits};

/// Backend tag recorded when mock content was served.
pub const BACKEND: &str = "fallback";

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Mock ContentItem for a single asset.
pub fn content_item(asset: AssetType, keywords: &[String]) -> ContentItem {
    let joined = keywords.join(", ");
    ContentItem {
        title: truncate(&format!("AI Generated Title for {asset}"), content_limits::TITLE),
        sub_title: truncate(&format!("Ideas around {joined}"), content_limits::SUB_TITLE),
        description: truncate(
            &format!("Placeholder copy inspired by your keywords: {joined}."),
            content_limits::DESCRIPTION,
        ),
        cta_text: "Learn more".to_string(),
        highlighted_text: truncate(keywords.first().map(String::as_str).unwrap_or_default(), content_limits::HIGHLIGHTED_TEXT),
        show_brand_mark: false,
    }
}

/// Mock carousel with exactly `number_of_slides` items.
pub fn slides(keywords: &[String], number_of_slides: u8) -> Vec<ContentItem> {
    (1..=number_of_slides)
        .map(|n| {
            let mut item = content_item(AssetType::SocialCarousel, keywords);
            item.title = truncate(&format!("Slide {n}: {}", item.title), content_limits::TITLE);
            item
        })
        .collect()
}

/// Four deterministic hooks echoing the input topic.
pub fn hooks(input: &str) -> Vec<Hook> {
    let topic = truncate(input.trim(), 60);
    [
        format!("Here's what nobody tells you about {topic}."),
        format!("I spent years figuring out {topic}. Here's the shortcut."),
        format!("Stop scrolling if you care about {topic}."),
        format!("The biggest mistake people make with {topic}:"),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, hook)| Hook {
        id: idx as u32 + 1,
        hook,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_item_echoes_the_asset_type_and_keywords() {
        let keywords = vec!["discipline".to_string(), "growth".to_string()];
        let item = content_item(AssetType::QuoteCard, &keywords);
        assert_eq!(item.title, "AI Generated Title for quote-card");
        assert!(item.description.contains("discipline, growth"));
        assert_eq!(item.highlighted_text, "discipline");
        assert!(!item.show_brand_mark);
    }

    #[test]
    fn fields_respect_schema_limits() {
        let long_keyword = "k".repeat(500);
        let item = content_item(AssetType::SocialPost, &[long_keyword]);
        assert!(item.title.chars().count() <= content_limits::TITLE);
        assert!(item.sub_title.chars().count() <= content_limits::SUB_TITLE);
        assert!(item.description.chars().count() <= content_limits::DESCRIPTION);
        assert!(item.highlighted_text.chars().count() <= content_limits::HIGHLIGHTED_TEXT);
    }

    #[test]
    fn slides_match_the_requested_count() {
        let keywords = vec!["leadership".to_string()];
        for n in [1u8, 3, 10] {
            let slides = slides(&keywords, n);
            assert_eq!(slides.len(), n as usize);
            assert!(slides.iter().all(|s| !s.show_brand_mark));
        }
    }

    #[test]
    fn hooks_are_four_and_numbered() {
        let hooks = hooks("remote work");
        assert_eq!(hooks.len(), 4);
        assert_eq!(hooks[0].id, 1);
        assert_eq!(hooks[3].id, 4);
        assert!(hooks.iter().all(|h| h.hook.contains("remote work")));
    }
}
