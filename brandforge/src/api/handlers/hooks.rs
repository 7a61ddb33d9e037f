//! HTTP handler for post hook generation.

use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::api::models::generate::GenerateHooksRequest;
use crate::api::{ApiJson, ApiSuccess, ok};
use crate::errors::Result;
use crate::{AppState, ai};

#[utoipa::path(
    post,
    path = "/posts/generate-hooks",
    tag = "generation",
    summary = "Generate post hooks",
    description = "Write four opening lines for a post about the given topic or URL. \
        Model failures degrade to deterministic fallback hooks; valid input always \
        gets a 200.",
    request_body = GenerateHooksRequest,
    responses(
        (status = 200, description = "Exactly four hooks"),
        (status = 400, description = "Empty input"),
    )
)]
#[instrument(skip_all)]
pub async fn generate_hooks(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateHooksRequest>,
) -> Result<Json<ApiSuccess<Vec<ai::Hook>>>> {
    request.validate()?;

    let (hooks, _backend) = state.content_generator.generate_hooks(request.input.trim()).await;
    Ok(ok(hooks))
}
