//! HTTP handlers for asset-variant (bento) generation.

use axum::Json;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::api::models::users::CurrentUser;
use crate::api::models::variants::{
    ASSET_VARIANTS_PROMPT_TYPE, GenerateVariantsRequest, LatestContentQuery, VariantsResponse,
};
use crate::api::{ApiJson, ApiSuccess, ok};
use crate::auth::RequestIdentity;
use crate::auth::current_user::MaybeUser;
use crate::db::errors::DbError;
use crate::db::handlers::GeneratedContent;
use crate::db::models::generated_content::GeneratedContentCreateDBRequest;
use crate::errors::{Error, Result};
use crate::types::Plan;
use crate::AppState;

/// Backend tag stored for worker-produced bundles.
const WORKER_BACKEND: &str = "variants-worker";

/// Reject a free-plan user who has already used up their generations.
/// Anonymous (temp-id) callers and pro users are not capped.
async fn check_quota(state: &AppState, user: Option<&CurrentUser>) -> Result<()> {
    let Some(user) = user else { return Ok(()) };
    if user.plan != Plan::Free {
        return Ok(());
    }

    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = GeneratedContent::new(&mut conn);
    let existing = repo.count_for_user(user.id).await?;

    if existing >= state.config.quota.free_plan_generation_limit {
        return Err(Error::QuotaExceeded {
            message: "Free plan limit reached. Upgrade to generate more assets.".to_string(),
        });
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/generate-text",
    tag = "generation",
    summary = "Generate asset-variant bundles",
    description = "Produce three bento bundles from the onboarding answers via the \
        external worker. Unlike copy generation there is no fallback: worker and \
        persistence failures surface to the caller, because the persisted id is \
        part of the response.",
    request_body = GenerateVariantsRequest,
    responses(
        (status = 200, description = "Persisted id plus the worker's variant bundles"),
        (status = 400, description = "Invalid request shape"),
        (status = 401, description = "No identity (session or tempUserId) supplied"),
        (status = 403, description = "Free-plan quota exhausted"),
        (status = 500, description = "Worker or persistence failure"),
    )
)]
#[instrument(skip_all)]
pub async fn generate_variants(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    ApiJson(request): ApiJson<GenerateVariantsRequest>,
) -> Result<Json<ApiSuccess<VariantsResponse>>> {
    request.validate()?;
    let identity = RequestIdentity::resolve(user.as_ref(), request.temp_user_id)?;

    // Quota is checked before spending worker time
    check_quota(&state, user.as_ref()).await?;

    let variants = state
        .variants_client
        .generate(request.what_do_you_offer.trim(), request.who_do_you_help.trim())
        .await?;

    // Persistence is mandatory here: the stored id is part of the contract,
    // so a failed insert fails the request.
    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = GeneratedContent::new(&mut conn);
    let record = repo
        .create(&GeneratedContentCreateDBRequest {
            user_id: identity.user_id(),
            temp_user_id: identity.temp_user_id(),
            keywords: vec![
                request.what_do_you_offer.trim().to_string(),
                request.who_do_you_help.trim().to_string(),
            ],
            prompt_type: ASSET_VARIANTS_PROMPT_TYPE.to_string(),
            generated_text: variants,
            model: WORKER_BACKEND.to_string(),
        })
        .await?;

    Ok(ok(VariantsResponse::from(record)))
}

#[utoipa::path(
    get,
    path = "/generate-text",
    tag = "generation",
    summary = "Fetch the most recent generation for an identity",
    description = "Returns the newest generated-content row for the caller's user id \
        (or the supplied temp id). Absence is a normal `data: null` success, not an error.",
    params(LatestContentQuery),
    responses(
        (status = 200, description = "The newest record, or null when none exists"),
        (status = 401, description = "No identity supplied"),
    )
)]
#[instrument(skip(state, user))]
pub async fn get_latest(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Query(query): Query<LatestContentQuery>,
) -> Result<Json<ApiSuccess<Option<VariantsResponse>>>> {
    let identity = RequestIdentity::resolve(user.as_ref(), query.id)?;
    let identity_id = match identity {
        RequestIdentity::User(id) | RequestIdentity::Temp(id) => id,
    };

    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = GeneratedContent::new(&mut conn);
    let record = repo.latest_for_identity(identity_id).await?;

    Ok(ok(record.map(VariantsResponse::from)))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{
        config_with_mock_backends, create_test_app, create_test_app_with_config, create_test_pro_user, create_test_user,
        proxy_auth_header, seed_generation_for_user,
    };
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use sqlx::PgPool;
    use uuid::Uuid;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn worker_success(server_body: Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({"variants": server_body}))
    }

    fn bundles() -> Value {
        json!([{"topBanner": {"title": "a"}}, {"topBanner": {"title": "b"}}, {"topBanner": {"title": "c"}}])
    }

    fn request_body(temp_user_id: Option<Uuid>) -> Value {
        json!({
            "whatDoYouOffer": "design sprints",
            "whoDoYouHelp": "early-stage founders",
            "promptType": "asset-variants",
            "tempUserId": temp_user_id
        })
    }

    async fn mock_worker(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/generate"))
            .respond_with(worker_success(bundles()))
            .mount(server)
            .await;
    }

    #[sqlx::test]
    #[test_log::test]
    async fn anonymous_caller_with_temp_id_succeeds(pool: PgPool) {
        let server = MockServer::start().await;
        mock_worker(&server).await;

        let app = create_test_app_with_config(pool.clone(), config_with_mock_backends(&server)).await;
        let temp_id = Uuid::new_v4();
        let response = app.post("/api/v1/generate-text").json(&request_body(Some(temp_id))).await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["assetVariants"].as_array().unwrap().len(), 3);
        let id = body["data"]["id"].as_str().unwrap();

        // The id is real: the row exists with the answers stored as keywords
        let keywords: Vec<String> = sqlx::query_scalar("SELECT keywords FROM generated_content WHERE id = $1")
            .bind(Uuid::parse_str(id).unwrap())
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(keywords, vec!["design sprints", "early-stage founders"]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn no_identity_at_all_is_a_401(pool: PgPool) {
        let app = create_test_app(pool).await;
        let response = app.post("/api/v1/generate-text").json(&request_body(None)).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn blank_answers_are_a_400(pool: PgPool) {
        let app = create_test_app(pool).await;
        let response = app
            .post("/api/v1/generate-text")
            .json(&json!({
                "whatDoYouOffer": "   ",
                "whoDoYouHelp": "founders",
                "tempUserId": Uuid::new_v4()
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn unsupported_prompt_type_is_a_400(pool: PgPool) {
        let app = create_test_app(pool).await;
        let response = app
            .post("/api/v1/generate-text")
            .json(&json!({
                "whatDoYouOffer": "offer",
                "whoDoYouHelp": "help",
                "promptType": "something-else",
                "tempUserId": Uuid::new_v4()
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn free_plan_user_with_prior_generation_is_rejected(pool: PgPool) {
        let server = MockServer::start().await;
        // The worker must never be called for a capped user
        Mock::given(method("POST"))
            .and(path("/generate"))
            .respond_with(worker_success(bundles()))
            .expect(0)
            .mount(&server)
            .await;

        let app = create_test_app_with_config(pool.clone(), config_with_mock_backends(&server)).await;
        let user = create_test_user(&pool).await;
        seed_generation_for_user(&pool, user.id).await;

        let (header, value) = proxy_auth_header(&user.email);
        let response = app
            .post("/api/v1/generate-text")
            .add_header(&header, &value)
            .json(&request_body(None))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn free_plan_user_without_prior_generation_succeeds(pool: PgPool) {
        let server = MockServer::start().await;
        mock_worker(&server).await;

        let app = create_test_app_with_config(pool.clone(), config_with_mock_backends(&server)).await;
        let user = create_test_user(&pool).await;

        let (header, value) = proxy_auth_header(&user.email);
        let response = app
            .post("/api/v1/generate-text")
            .add_header(&header, &value)
            .json(&request_body(None))
            .await;

        response.assert_status(StatusCode::OK);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn pro_plan_user_is_not_capped(pool: PgPool) {
        let server = MockServer::start().await;
        mock_worker(&server).await;

        let app = create_test_app_with_config(pool.clone(), config_with_mock_backends(&server)).await;
        let user = create_test_pro_user(&pool).await;
        seed_generation_for_user(&pool, user.id).await;

        let (header, value) = proxy_auth_header(&user.email);
        let response = app
            .post("/api/v1/generate-text")
            .add_header(&header, &value)
            .json(&request_body(None))
            .await;

        response.assert_status(StatusCode::OK);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn worker_failure_is_a_500_with_the_message_surfaced(pool: PgPool) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let app = create_test_app_with_config(pool, config_with_mock_backends(&server)).await;
        let response = app
            .post("/api/v1/generate-text")
            .json(&request_body(Some(Uuid::new_v4())))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("502"));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn latest_lookup_by_temp_id_and_null_when_absent(pool: PgPool) {
        let server = MockServer::start().await;
        mock_worker(&server).await;

        let app = create_test_app_with_config(pool, config_with_mock_backends(&server)).await;
        let temp_id = Uuid::new_v4();

        // Nothing yet: success with null data
        let response = app.get(&format!("/api/v1/generate-text?id={temp_id}")).await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert!(body["data"].is_null());

        // Generate, then the lookup returns the record
        app.post("/api/v1/generate-text").json(&request_body(Some(temp_id))).await;

        let response = app.get(&format!("/api/v1/generate-text?id={temp_id}")).await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"]["assetVariants"].as_array().unwrap().len(), 3);
    }
}
