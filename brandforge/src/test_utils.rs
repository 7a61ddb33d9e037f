//! Test utilities for integration testing.

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use url::Url;
use uuid::Uuid;
use wiremock::MockServer;

use crate::config::{Config, ProxyHeaderAuthConfig};
use crate::db::handlers::{Brands, GeneratedContent, Users};
use crate::db::models::brands::{BrandDBResponse, BrandUpsertDBRequest};
use crate::db::models::generated_content::GeneratedContentCreateDBRequest;
use crate::db::models::users::{UserCreateDBRequest, UserDBResponse};
use crate::types::UserId;
use crate::AppState;

/// Config for tests: proxy-header auth with auto-create, JWT secret set,
/// every outbound backend pointed at a dead port so nothing escapes the test
/// unless a mock server is wired in via [`config_with_mock_backends`].
pub fn create_test_config() -> Config {
    let mut config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        secret_key: Some("test-secret-key-for-testing-only".to_string()),
        ..Default::default()
    };

    config.auth.proxy_header.enabled = true;
    config.auth.proxy_header.auto_create_users = true;

    config.openai.base_url = Url::parse("http://127.0.0.1:1/v1").unwrap();
    config.openai.timeout_secs = 2;
    config.variants_worker.url = Url::parse("http://127.0.0.1:1/generate").unwrap();
    config.variants_worker.timeout_secs = 5;
    config.mailing.enabled = false;

    config
}

/// Test config with the chat-completion and worker backends pointed at a
/// wiremock server.
pub fn config_with_mock_backends(server: &MockServer) -> Config {
    let mut config = create_test_config();
    config.openai.base_url = Url::parse(&format!("{}/v1", server.uri())).unwrap();
    config.variants_worker.url = Url::parse(&format!("{}/generate", server.uri())).unwrap();
    config
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::from_config(pool, create_test_config())
}

pub async fn create_test_app(pool: PgPool) -> TestServer {
    create_test_app_with_config(pool, create_test_config()).await
}

pub async fn create_test_app_with_config(pool: PgPool, config: Config) -> TestServer {
    let state = AppState::from_config(pool, config);
    let router = crate::build_router(state).expect("Failed to build router");
    TestServer::new(router).expect("Failed to create test server")
}

/// Header pair authenticating a request as `email` via proxy-header auth.
pub fn proxy_auth_header(email: &str) -> (String, String) {
    let config = ProxyHeaderAuthConfig::default();
    (config.header_name, email.to_string())
}

/// A chat-completion response body whose first choice contains `content`
/// (serialized to a JSON string, as the model would return it).
pub fn mock_completion(content: Value) -> Value {
    json!({
        "id": "chatcmpl-test",
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

pub async fn create_test_user(pool: &PgPool) -> UserDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut users_repo = Users::new(&mut conn);
    let email = format!("testuser_{}@example.com", Uuid::new_v4().simple());

    users_repo
        .create(&UserCreateDBRequest {
            email,
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            auth_source: "test".to_string(),
        })
        .await
        .expect("Failed to create test user")
}

pub async fn create_test_pro_user(pool: &PgPool) -> UserDBResponse {
    let user = create_test_user(pool).await;

    sqlx::query("UPDATE users SET plan = 'pro' WHERE id = $1")
        .bind(user.id)
        .execute(pool)
        .await
        .expect("Failed to upgrade test user");

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut users_repo = Users::new(&mut conn);
    users_repo
        .get_by_id(user.id)
        .await
        .expect("Failed to re-fetch test user")
        .expect("Test user should exist")
}

pub async fn create_test_brand(pool: &PgPool, user_id: UserId) -> BrandDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut brands_repo = Brands::new(&mut conn);

    brands_repo
        .upsert(&BrandUpsertDBRequest {
            id: Uuid::new_v4(),
            user_id,
            name: format!("test_brand_{}", Uuid::new_v4().simple()),
            config: json!({"primaryColor": "#112233"}),
            social_links: json!({}),
            brand_mark: json!({}),
        })
        .await
        .expect("Failed to create test brand")
}

/// Insert one generation record owned by `user_id`, for quota tests.
pub async fn seed_generation_for_user(pool: &PgPool, user_id: UserId) {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut repo = GeneratedContent::new(&mut conn);

    repo.create(&GeneratedContentCreateDBRequest {
        user_id: Some(user_id),
        temp_user_id: None,
        keywords: vec!["seed".to_string()],
        prompt_type: "social-post".to_string(),
        generated_text: json!({"title": "seed"}),
        model: "gpt-4o-mini".to_string(),
    })
    .await
    .expect("Failed to seed generation record");
}
