//! JSON schemas constraining chat-completion responses.
//!
//! The schemas are strict: every field required, `additionalProperties`
//! false, and string lengths bounded. Content that passes them needs no
//! further validation downstream.

use crate::types::content_limits;
use serde_json::{Value, json};

/// Schema for a single ContentItem.
pub fn content_item() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": {"type": "string", "maxLength": content_limits::TITLE},
            "subTitle": {"type": "string", "maxLength": content_limits::SUB_TITLE},
            "description": {"type": "string", "maxLength": content_limits::DESCRIPTION},
            "ctaText": {"type": "string", "maxLength": content_limits::CTA_TEXT},
            "highlightedText": {"type": "string", "maxLength": content_limits::HIGHLIGHTED_TEXT},
            "showBrandMark": {"type": "boolean"}
        },
        "required": ["title", "subTitle", "description", "ctaText", "highlightedText", "showBrandMark"],
        "additionalProperties": false
    })
}

/// Schema for a carousel: an object whose `slides` array has exactly
/// `number_of_slides` items.
pub fn carousel(number_of_slides: u8) -> Value {
    json!({
        "type": "object",
        "properties": {
            "slides": {
                "type": "array",
                "items": content_item(),
                "minItems": number_of_slides,
                "maxItems": number_of_slides
            }
        },
        "required": ["slides"],
        "additionalProperties": false
    })
}

/// Schema for hook generation: exactly four `{id, hook}` entries.
pub fn hooks() -> Value {
    json!({
        "type": "object",
        "properties": {
            "hooks": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": {"type": "integer", "minimum": 1, "maximum": 4},
                        "hook": {"type": "string", "maxLength": 120}
                    },
                    "required": ["id", "hook"],
                    "additionalProperties": false
                },
                "minItems": 4,
                "maxItems": 4
            }
        },
        "required": ["hooks"],
        "additionalProperties": false
    })
}
