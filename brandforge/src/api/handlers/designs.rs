//! HTTP handlers for designs, including server-side content resolution.

use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;

use crate::api::models::designs::{DesignResponse, DesignUpsert, ListDesignsQuery, ResolveContentQuery};
use crate::api::models::users::CurrentUser;
use crate::api::{ApiJson, ApiSuccess, ok};
use crate::db::errors::DbError;
use crate::db::handlers::{Brands, Designs};
use crate::errors::{Error, Result};
use crate::registry::colors::{self, BrandColors};
use crate::registry::data_config::{self, ContentOverrides};
use crate::types::{AssetType, ContentItem, DesignId};
use crate::AppState;

fn design_not_found(id: DesignId) -> Error {
    Error::NotFound {
        resource: "Design".to_string(),
        id: id.to_string(),
    }
}

#[utoipa::path(
    post,
    path = "/designs",
    tag = "designs",
    summary = "Create or update a design",
    request_body = DesignUpsert,
    responses(
        (status = 200, description = "The saved design"),
        (status = 400, description = "Unknown style/template key"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Brand absent or owned by another user"),
    )
)]
#[instrument(skip(state, user, design), fields(user_id = %user.id))]
pub async fn upsert_design(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(design): ApiJson<DesignUpsert>,
) -> Result<Json<ApiSuccess<DesignResponse>>> {
    design.validate()?;

    let mut conn = state.db.acquire().await.map_err(DbError::from)?;

    // The target brand must exist and belong to the caller
    let brand_id = design.brand_id;
    let mut brands = Brands::new(&mut conn);
    brands.get_owned(brand_id, user.id).await?.ok_or_else(|| Error::NotFound {
        resource: "Brand".to_string(),
        id: brand_id.to_string(),
    })?;

    let mut repo = Designs::new(&mut conn);
    let saved = repo.upsert(&design.into_db_request(user.id)).await?;

    Ok(ok(DesignResponse::from(saved)))
}

#[utoipa::path(
    get,
    path = "/designs",
    tag = "designs",
    summary = "List the caller's designs",
    params(ListDesignsQuery),
    responses(
        (status = 200, description = "Designs, newest first"),
        (status = 401, description = "Not authenticated"),
    )
)]
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn list_designs(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ListDesignsQuery>,
) -> Result<Json<ApiSuccess<Vec<DesignResponse>>>> {
    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = Designs::new(&mut conn);
    let designs = repo.list_for_user(user.id, query.brand_id).await?;

    Ok(ok(designs.into_iter().map(DesignResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/designs/{id}",
    tag = "designs",
    summary = "Get one design",
    responses(
        (status = 200, description = "The design"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Absent or owned by another user"),
    )
)]
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn get_design(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DesignId>,
) -> Result<Json<ApiSuccess<DesignResponse>>> {
    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = Designs::new(&mut conn);

    let design = repo.get_owned(id, user.id).await?.ok_or_else(|| design_not_found(id))?;

    Ok(ok(DesignResponse::from(design)))
}

#[utoipa::path(
    get,
    path = "/designs/{id}/content",
    tag = "designs",
    summary = "Resolve a design's content",
    description = "Merge built-in defaults, the template entry and the stored user \
        edits into a single ContentItem, with the brand's colors substituted into \
        any placeholders. Carousel designs resolve per slide position.",
    params(ResolveContentQuery),
    responses(
        (status = 200, description = "The resolved ContentItem"),
        (status = 400, description = "Slide selection out of range"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Absent or owned by another user"),
    )
)]
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn resolve_content(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DesignId>,
    Query(query): Query<ResolveContentQuery>,
) -> Result<Json<ApiSuccess<ContentItem>>> {
    let mut conn = state.db.acquire().await.map_err(DbError::from)?;

    let mut designs = Designs::new(&mut conn);
    let design = designs.get_owned(id, user.id).await?.ok_or_else(|| design_not_found(id))?;

    let asset_type: AssetType = design.asset_type.parse().map_err(|_| Error::Internal {
        operation: format!("resolve stored asset type '{}'", design.asset_type),
    })?;

    // Stored data was written through the typed API; tolerate anything
    // unexpected by falling back to no overrides
    let overrides: ContentOverrides = serde_json::from_value(design.data).unwrap_or_default();

    let item = if asset_type.is_carousel() {
        let count = query.slide_count.unwrap_or(1);
        let index = query.slide_index.unwrap_or(0);
        if count == 0 || index >= count {
            return Err(Error::bad_request(format!(
                "slideIndex {index} is out of range for slideCount {count}"
            )));
        }
        data_config::resolve_slide(index, count, design.template_id, &overrides)
    } else {
        data_config::resolve(asset_type, design.template_id, &overrides)
    };

    let mut brands = Brands::new(&mut conn);
    let brand_colors = match brands.get_owned(design.brand_id, user.id).await? {
        Some(brand) => BrandColors::from_config(&brand.config),
        None => BrandColors::default(),
    };

    Ok(ok(colors::substitute_item(item, &brand_colors)))
}
