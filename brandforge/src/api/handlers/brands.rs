//! HTTP handlers for brands.

use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::api::models::brands::{BrandResponse, BrandUpsert};
use crate::api::models::users::CurrentUser;
use crate::api::{ApiJson, ApiSuccess, ok};
use crate::db::errors::DbError;
use crate::db::handlers::Brands;
use crate::errors::{Error, Result};
use crate::types::BrandId;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/brands",
    tag = "brands",
    summary = "Create or update a brand",
    request_body = BrandUpsert,
    responses(
        (status = 200, description = "The saved brand"),
        (status = 400, description = "Invalid brand"),
        (status = 401, description = "Not authenticated"),
    )
)]
#[instrument(skip(state, user, brand), fields(user_id = %user.id))]
pub async fn upsert_brand(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(brand): ApiJson<BrandUpsert>,
) -> Result<Json<ApiSuccess<BrandResponse>>> {
    brand.validate()?;

    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = Brands::new(&mut conn);
    let saved = repo.upsert(&brand.into_db_request(user.id)).await?;

    Ok(ok(BrandResponse::from(saved)))
}

#[utoipa::path(
    get,
    path = "/brands",
    tag = "brands",
    summary = "List the caller's brands",
    responses(
        (status = 200, description = "Brands, newest first"),
        (status = 401, description = "Not authenticated"),
    )
)]
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn list_brands(State(state): State<AppState>, user: CurrentUser) -> Result<Json<ApiSuccess<Vec<BrandResponse>>>> {
    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = Brands::new(&mut conn);
    let brands = repo.list_for_user(user.id).await?;

    Ok(ok(brands.into_iter().map(BrandResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/brands/{id}",
    tag = "brands",
    summary = "Get one brand",
    responses(
        (status = 200, description = "The brand"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Absent or owned by another user"),
    )
)]
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn get_brand(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<BrandId>,
) -> Result<Json<ApiSuccess<BrandResponse>>> {
    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = Brands::new(&mut conn);

    let brand = repo.get_owned(id, user.id).await?.ok_or_else(|| Error::NotFound {
        resource: "Brand".to_string(),
        id: id.to_string(),
    })?;

    Ok(ok(BrandResponse::from(brand)))
}
