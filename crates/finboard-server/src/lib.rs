//! Finboard API Server
//!
//! HTTP surface and infrastructure adapters for the market search proxy.
//! The Shuttle entrypoint in `main.rs` only builds [`ServerConfig`] and
//! hands it to [`build_state`] / [`build_router`].

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod adapters;
pub mod application;
pub mod config;
pub mod routes;

use adapters::FirecrawlClient;
use application::MarketSearchService;
pub use config::{FirecrawlConfig, ServerConfig};

/// Market search service wired to the Firecrawl adapter
pub type AppMarketSearchService = MarketSearchService<FirecrawlClient>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub market_search: Arc<AppMarketSearchService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Finboard API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Wire adapters and services from configuration.
///
/// A missing Firecrawl key is not a start-up failure: the service is built
/// without a provider and every search reports a configuration error.
pub fn build_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let has_key = config
        .firecrawl
        .api_key
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty());

    let provider = if has_key {
        let client = FirecrawlClient::new(&config.firecrawl)
            .context("Failed to build Firecrawl HTTP client")?;
        tracing::info!(
            "🔍 Firecrawl search initialized ({}, timeout {:?})",
            config.firecrawl.base_url,
            config.firecrawl.timeout
        );
        Some(Arc::new(client))
    } else {
        tracing::warn!("⚠️  No FIRECRAWL_API_KEY set - market search disabled");
        None
    };

    Ok(AppState {
        market_search: Arc::new(MarketSearchService::new(provider)),
    })
}

/// Build the router with permissive CORS on every route, pre-flight included.
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::search::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
