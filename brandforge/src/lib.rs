//! # brandforge: personal-branding asset generation backend
//!
//! `brandforge` is the API service behind a personal-branding studio: it
//! turns keywords and onboarding answers into social media copy (banners,
//! posts, quote cards, carousels), produces showcase "bento" bundles via an
//! external worker, and persists users, brands, designs and generation
//! records in PostgreSQL.
//!
//! ## Overview
//!
//! The service exposes a JSON API under `/api/v1`. Creative copy is produced
//! by a chat-completion call against an OpenAI-compatible backend,
//! constrained by a strict JSON schema so responses parse directly into
//! [`types::ContentItem`]s. That flow is deliberately best-effort: any
//! upstream failure degrades to deterministic placeholder content derived
//! from the request, and the caller still gets a 200. The asset-variant flow
//! is the opposite - its response embeds the id of the persisted record, so
//! worker and database failures surface as errors.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for
//! the HTTP layer and uses PostgreSQL (via SQLx) for all persistence.
//!
//! - The **API layer** ([`api`]) holds route handlers and wire models.
//! - The **auth layer** ([`auth`]) resolves callers from JWT session cookies
//!   or trusted proxy headers, and models the "user or anonymous temp id"
//!   identity used by the generation flows.
//! - The **database layer** ([`db`]) uses the repository pattern; each table
//!   has a repository wrapping a connection.
//! - The **registry** ([`registry`]) is the static style/template catalog
//!   plus the data-config resolver that merges defaults, template entries
//!   and user edits into render-ready content.
//! - The **AI service** ([`ai`]) and the [`variants`] / [`marketing`]
//!   clients wrap the three outbound HTTP integrations.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use brandforge::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = brandforge::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     brandforge::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod marketing;
mod openapi;
pub mod registry;
pub mod telemetry;
pub mod types;
pub mod variants;

#[cfg(test)]
pub mod test_utils;

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Router, http};
use bon::Builder;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::ai::ContentGenerator;
use crate::config::CorsOrigin;
use crate::marketing::MailingListClient;
use crate::openapi::ApiDoc;
use crate::variants::VariantsClient;

pub use config::Config;

/// Application state shared across all request handlers.
///
/// Holds the database pool, the loaded configuration, and the three outbound
/// HTTP clients (chat completions, variants worker, mailing list).
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub content_generator: Arc<ContentGenerator>,
    pub variants_client: Arc<VariantsClient>,
    pub mailing: Arc<MailingListClient>,
}

impl AppState {
    /// Build the full state, constructing every service from configuration.
    pub fn from_config(db: PgPool, config: Config) -> Self {
        let content_generator = Arc::new(ContentGenerator::new(&config.openai));
        let variants_client = Arc::new(VariantsClient::new(&config.variants_worker));
        let mailing = Arc::new(MailingListClient::new(&config.mailing));

        AppState::builder()
            .db(db)
            .config(config)
            .content_generator(content_generator)
            .variants_client(variants_client)
            .mailing(mailing)
            .build()
    }
}

/// Get the brandforge database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let mut origins = Vec::new();
    for origin in &config.auth.cors.allowed_origins {
        let header_value = match origin {
            CorsOrigin::Wildcard => "*".parse::<HeaderValue>()?,
            CorsOrigin::Url(url) => url.as_str().trim_end_matches('/').parse::<HeaderValue>()?,
        };
        origins.push(header_value);
    }

    let mut cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(config.auth.cors.allow_credentials)
        .expose_headers(vec![http::header::LOCATION]);

    if let Some(max_age) = config.auth.cors.max_age {
        cors = cors.max_age(Duration::from_secs(max_age));
    }

    Ok(cors)
}

/// Build the application router with all endpoints and middleware.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        .route(
            "/generate-ai-text",
            post(api::handlers::generate::generate_content).get(api::handlers::generate::get_content),
        )
        .route(
            "/generate-text",
            post(api::handlers::variants::generate_variants).get(api::handlers::variants::get_latest),
        )
        .route("/posts/generate-hooks", post(api::handlers::hooks::generate_hooks))
        .route(
            "/user",
            get(api::handlers::users::get_user).put(api::handlers::users::update_user),
        )
        .route(
            "/brands",
            post(api::handlers::brands::upsert_brand).get(api::handlers::brands::list_brands),
        )
        .route("/brands/{id}", get(api::handlers::brands::get_brand))
        .route(
            "/designs",
            post(api::handlers::designs::upsert_design).get(api::handlers::designs::list_designs),
        )
        .route("/designs/{id}", get(api::handlers::designs::get_design))
        .route("/designs/{id}/content", get(api::handlers::designs::resolve_content))
        .route("/templates/{asset_type}", get(api::handlers::templates::get_catalog))
        .with_state(state.clone());

    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .nest("/api/v1", api_routes)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    let cors_layer = create_cors_layer(&state.config)?;

    let router = router.layer(cors_layer).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// Main application struct that owns all resources and lifecycle.
///
/// 1. **Create**: [`Application::new`] connects to the database, runs
///    migrations, and builds the router.
/// 2. **Serve**: [`Application::serve`] binds to a TCP port and handles
///    requests until the shutdown future resolves.
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
            .connect(&config.database.url)
            .await?;

        migrator().run(&pool).await?;

        let state = AppState::from_config(pool.clone(), config.clone());
        let router = build_router(state)?;

        Ok(Self { router, config, pool })
    }

    /// Start serving the application until `shutdown` resolves.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("brandforge listening on http://{bind_addr}");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
