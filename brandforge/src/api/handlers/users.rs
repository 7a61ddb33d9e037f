//! HTTP handlers for the current user's profile.

use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::api::models::users::{CurrentUser, UserResponse, UserUpdate};
use crate::api::{ApiJson, ApiSuccess, ok};
use crate::db::errors::DbError;
use crate::db::handlers::Users;
use crate::db::models::users::UserUpdateDBRequest;
use crate::errors::{Error, Result};
use crate::types::OnboardingStatus;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/user",
    tag = "users",
    summary = "Get the current profile",
    responses(
        (status = 200, description = "The caller's profile"),
        (status = 401, description = "Not authenticated"),
    )
)]
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn get_user(State(state): State<AppState>, user: CurrentUser) -> Result<Json<ApiSuccess<UserResponse>>> {
    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = Users::new(&mut conn);

    let profile = repo.get_by_id(user.id).await?.ok_or_else(|| Error::NotFound {
        resource: "User".to_string(),
        id: user.id.to_string(),
    })?;

    Ok(ok(UserResponse::from(profile)))
}

#[utoipa::path(
    put,
    path = "/user",
    tag = "users",
    summary = "Update the current profile",
    description = "Partial update of profile fields. Completing onboarding subscribes \
        the user to the mailing list; that side effect is best-effort and its failure \
        is only logged.",
    request_body = UserUpdate,
    responses(
        (status = 200, description = "The updated profile"),
        (status = 401, description = "Not authenticated"),
    )
)]
#[instrument(skip(state, user, update), fields(user_id = %user.id))]
pub async fn update_user(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(update): ApiJson<UserUpdate>,
) -> Result<Json<ApiSuccess<UserResponse>>> {
    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = Users::new(&mut conn);

    let before = repo.get_by_id(user.id).await?.ok_or_else(|| Error::NotFound {
        resource: "User".to_string(),
        id: user.id.to_string(),
    })?;

    let updated = repo
        .update(
            user.id,
            &UserUpdateDBRequest {
                first_name: update.first_name,
                last_name: update.last_name,
                profile_url: update.profile_url,
                onboarding_status: update.onboarding_status,
            },
        )
        .await?;

    // Fire the mailing-list subscription exactly once, on the transition
    // into COMPLETE. subscribe() swallows its own failures.
    if before.onboarding_status != OnboardingStatus::Complete && updated.onboarding_status == OnboardingStatus::Complete {
        state
            .mailing
            .subscribe(&updated.email, updated.first_name.as_deref(), updated.last_name.as_deref())
            .await;
    }

    Ok(ok(UserResponse::from(updated)))
}
