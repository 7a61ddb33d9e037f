//! Deterministic prompt templates.
//!
//! Prompt content depends only on the asset type and the keywords (plus the
//! slide count for carousels); keywords are joined with `", "`.

use crate::types::AssetType;

pub fn system_prompt(asset: AssetType) -> String {
    let format_hint = match asset {
        AssetType::SocialBanner => "a profile banner that introduces a professional at a glance",
        AssetType::SocialPost => "a single social media post that shares one clear insight",
        AssetType::FeaturedPost => "a featured post that showcases someone's flagship work",
        AssetType::QuoteCard => "a shareable quote card",
        AssetType::TextimgPost => "a short text overlay placed on top of an image",
        AssetType::MockupPost => "a product mockup post with a short pitch",
        AssetType::SocialCarousel => "a multi-slide educational carousel",
    };

    format!(
        "You are a personal-branding copywriter. Write concise, confident copy for {format_hint}. \
         Stay within the length limits of the response schema and respond with JSON only."
    )
}

pub fn user_prompt(asset: AssetType, keywords: &[String]) -> String {
    format!(
        "Write the copy for a {} around these themes: {}.",
        asset,
        keywords.join(", ")
    )
}

pub fn carousel_user_prompt(keywords: &[String], number_of_slides: u8) -> String {
    format!(
        "Write a {}-slide carousel around these themes: {}. \
         The first slide hooks the reader, the last slide ends with a call to action, \
         and every slide in between makes exactly one point.",
        number_of_slides,
        keywords.join(", ")
    )
}

pub fn hooks_system_prompt() -> String {
    "You are a social media ghostwriter. Given a topic or a link, write scroll-stopping \
     opening lines (hooks) for a post about it. Respond with JSON only."
        .to_string()
}

pub fn hooks_user_prompt(input: &str) -> String {
    format!("Write 4 distinct hooks for a post about: {input}")
}
