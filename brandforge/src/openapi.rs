//! OpenAPI documentation for the API under `/api/v1`.
//!
//! Served as interactive docs at `/docs` via Scalar.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Brandforge API",
        description = "Generation and persistence backend for personal-branding social assets"
    ),
    paths(
        crate::api::handlers::generate::generate_content,
        crate::api::handlers::generate::get_content,
        crate::api::handlers::variants::generate_variants,
        crate::api::handlers::variants::get_latest,
        crate::api::handlers::hooks::generate_hooks,
        crate::api::handlers::users::get_user,
        crate::api::handlers::users::update_user,
        crate::api::handlers::brands::upsert_brand,
        crate::api::handlers::brands::list_brands,
        crate::api::handlers::brands::get_brand,
        crate::api::handlers::designs::upsert_design,
        crate::api::handlers::designs::list_designs,
        crate::api::handlers::designs::get_design,
        crate::api::handlers::designs::resolve_content,
        crate::api::handlers::templates::get_catalog,
    ),
    components(schemas(
        crate::types::AssetType,
        crate::types::ContentItem,
        crate::types::Plan,
        crate::types::OnboardingStatus,
        crate::ai::Hook,
        crate::api::models::generate::GenerateContentRequest,
        crate::api::models::generate::GeneratedContentResponse,
        crate::api::models::generate::GenerateHooksRequest,
        crate::api::models::variants::GenerateVariantsRequest,
        crate::api::models::variants::VariantsResponse,
        crate::api::models::users::CurrentUser,
        crate::api::models::users::UserResponse,
        crate::api::models::users::UserUpdate,
        crate::api::models::brands::BrandUpsert,
        crate::api::models::brands::BrandResponse,
        crate::api::models::designs::DesignUpsert,
        crate::api::models::designs::DesignResponse,
        crate::api::handlers::templates::CatalogResponse,
        crate::api::handlers::templates::StyleEntry,
        crate::api::handlers::templates::TemplateEntry,
        crate::registry::data_config::ContentOverrides,
    )),
    tags(
        (name = "generation", description = "AI copy, hook and asset-variant generation"),
        (name = "users", description = "Current user profile"),
        (name = "brands", description = "Brand configuration"),
        (name = "designs", description = "Saved designs and content resolution"),
        (name = "templates", description = "Style/template registry catalog"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_spec_builds() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json().expect("spec serializes");
        assert!(json.contains("/generate-ai-text"));
        assert!(json.contains("/posts/generate-hooks"));
    }
}
