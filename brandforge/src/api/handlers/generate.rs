//! HTTP handlers for AI copy generation.

use axum::Json;
use axum::extract::{Query, State};
use tracing::{instrument, warn};

use crate::api::models::generate::{GenerateContentRequest, GeneratedContentResponse, GetContentQuery};
use crate::api::models::users::CurrentUser;
use crate::api::{ApiJson, ApiSuccess, ok};
use crate::auth::current_user::MaybeUser;
use crate::db::handlers::GeneratedContent;
use crate::db::models::generated_content::GeneratedContentCreateDBRequest;
use crate::errors::{Error, Result};
use crate::{AppState, ai};

/// Record a generation result, swallowing any failure: content generation
/// succeeds independent of storage.
async fn store_generation(state: &AppState, request: GeneratedContentCreateDBRequest) {
    let mut conn = match state.db.acquire().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!(error = %e, "Skipping generation record: could not acquire connection");
            return;
        }
    };

    let mut repo = GeneratedContent::new(&mut conn);
    if let Err(e) = repo.create(&request).await {
        warn!(error = %e, prompt_type = %request.prompt_type, "Failed to persist generation record");
    }
}

#[utoipa::path(
    post,
    path = "/generate-ai-text",
    tag = "generation",
    summary = "Generate asset copy",
    description = "Generate ContentItem copy for an asset type from keywords. \
        Upstream model failures degrade to deterministic placeholder content; \
        only request validation produces an error response.",
    request_body = GenerateContentRequest,
    responses(
        (status = 200, description = "Generated content (single item, or one per slide for carousels)"),
        (status = 400, description = "Invalid request shape"),
    )
)]
#[instrument(skip_all, fields(asset = %request.asset_type))]
pub async fn generate_content(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    ApiJson(request): ApiJson<GenerateContentRequest>,
) -> Result<Json<ApiSuccess<ai::GenerationOutput>>> {
    request.validate()?;

    let keywords: Vec<String> = request
        .keywords
        .iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();

    let (output, backend) = state
        .content_generator
        .generate(request.asset_type, &keywords, request.effective_slides())
        .await;

    // Best-effort persistence. Anonymous callers without a tempUserId have
    // no identity to attach the record to, so there is nothing to store.
    let user_id = user.map(|u| u.id);
    if user_id.is_some() || request.temp_user_id.is_some() {
        store_generation(
            &state,
            GeneratedContentCreateDBRequest {
                user_id,
                temp_user_id: if user_id.is_some() { None } else { request.temp_user_id },
                keywords,
                prompt_type: request.asset_type.as_str().to_string(),
                generated_text: output.to_json(),
                model: backend,
            },
        )
        .await;
    }

    Ok(ok(output))
}

#[utoipa::path(
    get,
    path = "/generate-ai-text",
    tag = "generation",
    summary = "Fetch a stored generation record",
    params(GetContentQuery),
    responses(
        (status = 200, description = "The record's parsed content"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Record absent or owned by another user"),
    )
)]
#[instrument(skip(state, user))]
pub async fn get_content(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<GetContentQuery>,
) -> Result<Json<ApiSuccess<GeneratedContentResponse>>> {
    let mut conn = state.db.acquire().await.map_err(crate::db::errors::DbError::from)?;
    let mut repo = GeneratedContent::new(&mut conn);

    // Ownership mismatch reads the same as absence
    let record = repo
        .get_owned(query.id, user.id)
        .await?
        .ok_or_else(|| Error::NotFound {
            resource: "Generated content".to_string(),
            id: query.id.to_string(),
        })?;

    Ok(ok(GeneratedContentResponse::from(record)))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{
        config_with_mock_backends, create_test_app, create_test_app_with_config, create_test_user, mock_completion,
        proxy_auth_header,
    };
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use sqlx::PgPool;
    use uuid::Uuid;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn item_json(title: &str) -> Value {
        json!({
            "title": title,
            "subTitle": "sub",
            "description": "desc",
            "ctaText": "go",
            "highlightedText": "hi",
            "showBrandMark": true
        })
    }

    #[sqlx::test]
    #[test_log::test]
    async fn quote_card_generation_returns_single_item(pool: PgPool) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion(item_json("Discipline wins"))))
            .mount(&server)
            .await;

        let app = create_test_app_with_config(pool, config_with_mock_backends(&server)).await;
        let response = app
            .post("/api/v1/generate-ai-text")
            .json(&json!({
                "assetType": "quote-card",
                "keywords": ["discipline", "growth"],
                "tempUserId": Uuid::new_v4()
            }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["title"], "Discipline wins");
        assert_eq!(body["data"]["showBrandMark"], false);
        assert!(body["data"]["title"].as_str().unwrap().len() <= 60);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn carousel_returns_exactly_requested_slides(pool: PgPool) {
        let server = MockServer::start().await;
        let slides = json!({"slides": [item_json("one"), item_json("two"), item_json("three")]});
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion(slides)))
            .mount(&server)
            .await;

        let app = create_test_app_with_config(pool, config_with_mock_backends(&server)).await;
        let response = app
            .post("/api/v1/generate-ai-text")
            .json(&json!({
                "assetType": "social-carousel",
                "keywords": ["leadership"],
                "numberOfSlides": 3,
                "tempUserId": Uuid::new_v4()
            }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn carousel_without_slide_count_is_a_400(pool: PgPool) {
        let app = create_test_app(pool).await;
        let response = app
            .post("/api/v1/generate-ai-text")
            .json(&json!({
                "assetType": "social-carousel",
                "keywords": ["x"]
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "numberOfSlides is required for carousel assets");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn slide_count_on_non_carousel_is_ignored(pool: PgPool) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion(item_json("Post"))))
            .mount(&server)
            .await;

        let app = create_test_app_with_config(pool, config_with_mock_backends(&server)).await;
        let response = app
            .post("/api/v1/generate-ai-text")
            .json(&json!({
                "assetType": "social-post",
                "keywords": ["focus"],
                "numberOfSlides": 7
            }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        // Still a single object, not an array
        assert!(body["data"].is_object());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn empty_keywords_are_a_400(pool: PgPool) {
        let app = create_test_app(pool).await;
        let response = app
            .post("/api/v1/generate-ai-text")
            .json(&json!({"assetType": "social-post", "keywords": []}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn unknown_asset_type_is_a_400(pool: PgPool) {
        let app = create_test_app(pool).await;
        let response = app
            .post("/api/v1/generate-ai-text")
            .json(&json!({"assetType": "video-reel", "keywords": ["x"]}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body.get("details").is_some());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn upstream_failure_still_returns_200_with_keyword_content(pool: PgPool) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let app = create_test_app_with_config(pool, config_with_mock_backends(&server)).await;
        let response = app
            .post("/api/v1/generate-ai-text")
            .json(&json!({
                "assetType": "quote-card",
                "keywords": ["discipline", "growth"]
            }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["title"], "AI Generated Title for quote-card");
        assert!(body["data"]["description"].as_str().unwrap().contains("discipline, growth"));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn carousel_fallback_matches_requested_length(pool: PgPool) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let app = create_test_app_with_config(pool, config_with_mock_backends(&server)).await;
        let response = app
            .post("/api/v1/generate-ai-text")
            .json(&json!({
                "assetType": "social-carousel",
                "keywords": ["x"],
                "numberOfSlides": 5
            }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 5);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn authenticated_generation_is_retrievable_by_owner_only(pool: PgPool) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion(item_json("Mine"))))
            .mount(&server)
            .await;

        let app = create_test_app_with_config(pool.clone(), config_with_mock_backends(&server)).await;
        let owner = create_test_user(&pool).await;
        let other = create_test_user(&pool).await;

        let (header, value) = proxy_auth_header(&owner.email);
        let response = app
            .post("/api/v1/generate-ai-text")
            .add_header(&header, &value)
            .json(&json!({"assetType": "featured-post", "keywords": ["launch"]}))
            .await;
        response.assert_status(StatusCode::OK);

        // Find the stored record id
        let record_id: Uuid = sqlx::query_scalar("SELECT id FROM generated_content WHERE user_id = $1")
            .bind(owner.id)
            .fetch_one(&pool)
            .await
            .unwrap();

        // Owner can read it back
        let response = app
            .get(&format!("/api/v1/generate-ai-text?id={record_id}"))
            .add_header(&header, &value)
            .await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"]["content"]["title"], "Mine");
        assert_eq!(body["data"]["promptType"], "featured-post");

        // Another user gets a 404, not a 403
        let (header, value) = proxy_auth_header(&other.email);
        let response = app
            .get(&format!("/api/v1/generate-ai-text?id={record_id}"))
            .add_header(&header, &value)
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn get_requires_authentication(pool: PgPool) {
        let app = create_test_app(pool).await;
        let response = app.get(&format!("/api/v1/generate-ai-text?id={}", Uuid::new_v4())).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
