//! AI content generation service.
//!
//! Builds structured prompts from the asset type and keywords, runs a
//! schema-constrained chat completion, and parses the result into
//! [`ContentItem`]s. Best-effort with guaranteed structural output: any
//! upstream failure (network, non-2xx, missing content, malformed or
//! wrong-shaped JSON) silently degrades to deterministic mock content, so
//! the caller always receives a valid result. Only request validation can
//! fail, and that happens before this service is invoked.

pub mod client;
pub mod fallback;
pub mod prompts;
pub mod schema;

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use utoipa::ToSchema;

use crate::ai::client::{ChatClient, GenerationError};
use crate::config::OpenAiConfig;
use crate::types::{AssetType, ContentItem};

/// Result of one generation call: a single item, or one item per slide.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GenerationOutput {
    Single(ContentItem),
    Slides(Vec<ContentItem>),
}

impl GenerationOutput {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("content items serialize to JSON")
    }
}

/// One generated opening line for a post.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Hook {
    pub id: u32,
    pub hook: String,
}

#[derive(Deserialize)]
struct SlidesEnvelope {
    slides: Vec<ContentItem>,
}

#[derive(Deserialize)]
struct HooksEnvelope {
    hooks: Vec<Hook>,
}

const SINGLE_TEMPERATURE: f32 = 0.7;
const CAROUSEL_TEMPERATURE: f32 = 0.8;
const HOOKS_TEMPERATURE: f32 = 0.8;
const HOOK_COUNT: usize = 4;

pub struct ContentGenerator {
    client: ChatClient,
}

impl ContentGenerator {
    pub fn new(config: &OpenAiConfig) -> Self {
        Self {
            client: ChatClient::new(config),
        }
    }

    /// Generate content for an asset. Never fails: upstream errors are
    /// logged and masked with fallback content.
    ///
    /// Callers validate the request first; this method assumes
    /// `number_of_slides` is `Some` exactly when `asset` is a carousel.
    /// Returns the output together with the backend tag that produced it
    /// (the model name, or [`fallback::BACKEND`]).
    #[instrument(skip(self, keywords), fields(asset = %asset, keyword_count = keywords.len()))]
    pub async fn generate(
        &self,
        asset: AssetType,
        keywords: &[String],
        number_of_slides: Option<u8>,
    ) -> (GenerationOutput, String) {
        match self.try_generate(asset, keywords, number_of_slides).await {
            Ok(output) => (output, self.client.model().to_string()),
            Err(error) => {
                warn!(%error, %asset, "Content generation failed, serving fallback content");
                let output = match number_of_slides {
                    Some(n) if asset.is_carousel() => GenerationOutput::Slides(fallback::slides(keywords, n)),
                    _ => GenerationOutput::Single(fallback::content_item(asset, keywords)),
                };
                (output, fallback::BACKEND.to_string())
            }
        }
    }

    async fn try_generate(
        &self,
        asset: AssetType,
        keywords: &[String],
        number_of_slides: Option<u8>,
    ) -> Result<GenerationOutput, GenerationError> {
        let system = prompts::system_prompt(asset);

        match number_of_slides {
            Some(n) if asset.is_carousel() => {
                let content = self
                    .client
                    .complete(
                        system,
                        prompts::carousel_user_prompt(keywords, n),
                        CAROUSEL_TEMPERATURE,
                        "carousel_content",
                        schema::carousel(n),
                    )
                    .await?;

                let envelope: SlidesEnvelope = serde_json::from_str(&content)?;
                if envelope.slides.len() != n as usize {
                    return Err(GenerationError::UnexpectedShape {
                        expected: n as usize,
                        actual: envelope.slides.len(),
                    });
                }

                let slides = envelope
                    .slides
                    .into_iter()
                    .map(|mut item| {
                        item.show_brand_mark = false;
                        item
                    })
                    .collect();
                Ok(GenerationOutput::Slides(slides))
            }
            _ => {
                let content = self
                    .client
                    .complete(
                        system,
                        prompts::user_prompt(asset, keywords),
                        SINGLE_TEMPERATURE,
                        "asset_content",
                        schema::content_item(),
                    )
                    .await?;

                let mut item: ContentItem = serde_json::from_str(&content)?;
                item.show_brand_mark = false;
                Ok(GenerationOutput::Single(item))
            }
        }
    }

    /// Generate four post hooks for a topic or URL. Same masking contract
    /// as [`generate`](Self::generate).
    #[instrument(skip(self, input))]
    pub async fn generate_hooks(&self, input: &str) -> (Vec<Hook>, String) {
        match self.try_generate_hooks(input).await {
            Ok(hooks) => (hooks, self.client.model().to_string()),
            Err(error) => {
                warn!(%error, "Hook generation failed, serving fallback hooks");
                (fallback::hooks(input), fallback::BACKEND.to_string())
            }
        }
    }

    async fn try_generate_hooks(&self, input: &str) -> Result<Vec<Hook>, GenerationError> {
        let content = self
            .client
            .complete(
                prompts::hooks_system_prompt(),
                prompts::hooks_user_prompt(input),
                HOOKS_TEMPERATURE,
                "post_hooks",
                schema::hooks(),
            )
            .await?;

        let envelope: HooksEnvelope = serde_json::from_str(&content)?;
        if envelope.hooks.len() != HOOK_COUNT {
            return Err(GenerationError::UnexpectedShape {
                expected: HOOK_COUNT,
                actual: envelope.hooks.len(),
            });
        }
        Ok(envelope.hooks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn generator_for(server: &MockServer) -> ContentGenerator {
        ContentGenerator::new(&OpenAiConfig {
            base_url: Url::parse(&format!("{}/v1", server.uri())).unwrap(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 5,
        })
    }

    fn completion_with(content: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content.to_string()},
                "finish_reason": "stop"
            }]
        })
    }

    fn item_json(title: &str) -> serde_json::Value {
        json!({
            "title": title,
            "subTitle": "sub",
            "description": "desc",
            "ctaText": "go",
            "highlightedText": "hi",
            "showBrandMark": true
        })
    }

    #[tokio::test]
    async fn single_asset_success_forces_brand_mark_off() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_with(item_json("Model title"))))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let keywords = vec!["focus".to_string()];
        let (output, backend) = generator.generate(AssetType::QuoteCard, &keywords, None).await;

        assert_eq!(backend, "gpt-4o-mini");
        match output {
            GenerationOutput::Single(item) => {
                assert_eq!(item.title, "Model title");
                // The model said true; the service forces it off
                assert!(!item.show_brand_mark);
            }
            GenerationOutput::Slides(_) => panic!("expected a single item"),
        }
    }

    #[tokio::test]
    async fn carousel_success_returns_exactly_n_slides() {
        let server = MockServer::start().await;
        let slides = json!({"slides": [item_json("one"), item_json("two"), item_json("three")]});
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_with(slides)))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let keywords = vec!["leadership".to_string()];
        let (output, backend) = generator.generate(AssetType::SocialCarousel, &keywords, Some(3)).await;

        assert_eq!(backend, "gpt-4o-mini");
        match output {
            GenerationOutput::Slides(slides) => assert_eq!(slides.len(), 3),
            GenerationOutput::Single(_) => panic!("expected slides"),
        }
    }

    #[tokio::test]
    async fn upstream_500_falls_back_silently() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let keywords = vec!["discipline".to_string(), "growth".to_string()];
        let (output, backend) = generator.generate(AssetType::QuoteCard, &keywords, None).await;

        assert_eq!(backend, fallback::BACKEND);
        match output {
            GenerationOutput::Single(item) => {
                assert_eq!(item.title, "AI Generated Title for quote-card");
                assert!(item.description.contains("discipline, growth"));
            }
            GenerationOutput::Slides(_) => panic!("expected a single item"),
        }
    }

    #[tokio::test]
    async fn malformed_model_output_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_with(json!("not an object"))))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let keywords = vec!["x".to_string()];
        let (_, backend) = generator.generate(AssetType::SocialPost, &keywords, None).await;
        assert_eq!(backend, fallback::BACKEND);
    }

    #[tokio::test]
    async fn wrong_slide_count_falls_back_to_exact_length() {
        let server = MockServer::start().await;
        // Model returns 2 slides for a 4-slide request
        let slides = json!({"slides": [item_json("one"), item_json("two")]});
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_with(slides)))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let keywords = vec!["consistency".to_string()];
        let (output, backend) = generator.generate(AssetType::SocialCarousel, &keywords, Some(4)).await;

        assert_eq!(backend, fallback::BACKEND);
        match output {
            GenerationOutput::Slides(slides) => assert_eq!(slides.len(), 4),
            GenerationOutput::Single(_) => panic!("expected slides"),
        }
    }

    #[tokio::test]
    async fn connection_refused_falls_back() {
        // Point at a port that's not listening
        let generator = ContentGenerator::new(&OpenAiConfig {
            base_url: Url::parse("http://127.0.0.1:1/v1").unwrap(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 2,
        });

        let keywords = vec!["grit".to_string()];
        let (output, backend) = generator.generate(AssetType::SocialBanner, &keywords, None).await;
        assert_eq!(backend, fallback::BACKEND);
        match output {
            GenerationOutput::Single(item) => assert!(!item.title.is_empty()),
            GenerationOutput::Slides(_) => panic!("expected a single item"),
        }
    }

    #[tokio::test]
    async fn hooks_success_and_fallback() {
        let server = MockServer::start().await;
        let hooks = json!({"hooks": [
            {"id": 1, "hook": "a"}, {"id": 2, "hook": "b"},
            {"id": 3, "hook": "c"}, {"id": 4, "hook": "d"}
        ]});
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_with(hooks)))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let (hooks, backend) = generator.generate_hooks("cold outreach").await;
        assert_eq!(backend, "gpt-4o-mini");
        assert_eq!(hooks.len(), 4);

        // And the failure path
        let dead = ContentGenerator::new(&OpenAiConfig {
            base_url: Url::parse("http://127.0.0.1:1/v1").unwrap(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 2,
        });
        let (hooks, backend) = dead.generate_hooks("cold outreach").await;
        assert_eq!(backend, fallback::BACKEND);
        assert_eq!(hooks.len(), 4);
        assert!(hooks[0].hook.contains("cold outreach"));
    }
}
