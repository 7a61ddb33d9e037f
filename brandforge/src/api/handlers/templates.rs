//! HTTP handler for the style/template catalog.

use axum::Json;
use axum::extract::Path;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::{ApiSuccess, ok};
use crate::errors::{Error, Result};
use crate::registry::{self, StyleConfig, TemplateRef};
use crate::types::AssetType;

#[derive(Debug, Serialize, ToSchema)]
pub struct StyleEntry {
    pub key: i32,
    #[schema(value_type = Object)]
    pub config: StyleConfig,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateEntry {
    pub id: i32,
    #[schema(value_type = Object)]
    pub template: TemplateRef,
}

/// Everything the client's template picker needs for one asset type.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub asset_type: AssetType,
    pub styles: Vec<StyleEntry>,
    pub templates: Vec<TemplateEntry>,
}

#[utoipa::path(
    get,
    path = "/templates/{asset_type}",
    tag = "templates",
    summary = "List styles and templates for an asset type",
    responses(
        (status = 200, description = "The registry catalog for the asset type"),
        (status = 400, description = "Unknown asset type"),
    )
)]
#[instrument]
pub async fn get_catalog(Path(asset_type): Path<String>) -> Result<Json<ApiSuccess<CatalogResponse>>> {
    let asset_type: AssetType = asset_type
        .parse()
        .map_err(|e: String| Error::bad_request(e))?;

    let styles = registry::styles_for(asset_type)
        .into_iter()
        .map(|(key, config)| StyleEntry {
            key,
            config: config.clone(),
        })
        .collect();

    let templates = registry::templates_for(asset_type)
        .into_iter()
        .map(|(id, template)| TemplateEntry {
            id,
            template: template.clone(),
        })
        .collect();

    Ok(ok(CatalogResponse {
        asset_type,
        styles,
        templates,
    }))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::Value;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn catalog_lists_styles_and_templates(pool: PgPool) {
        let app = create_test_app(pool).await;
        let response = app.get("/api/v1/templates/quote-card").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"]["assetType"], "quote-card");
        assert!(!body["data"]["styles"].as_array().unwrap().is_empty());
        assert_eq!(body["data"]["styles"][0]["key"], 1);
        assert!(!body["data"]["templates"].as_array().unwrap().is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn unknown_asset_type_is_a_400(pool: PgPool) {
        let app = create_test_app(pool).await;
        let response = app.get("/api/v1/templates/video-reel").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
