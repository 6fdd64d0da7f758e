//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use finboard::{CompanyInfo, SearchRequest, SearchResponse, SearchResult, SearchType};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Search endpoints
        super::search::market_search,
    ),
    info(
        title = "Finboard API",
        version = "0.1.0",
        description = "Market search proxy for the Finboard financial dashboard.\n\nForwards `{query, type}` to Firecrawl and returns normalized news in a uniform envelope.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Search", description = "Search - Market news via Firecrawl"),
    ),
    components(
        schemas(
            SearchType,
            SearchRequest,
            SearchResult,
            CompanyInfo,
            SearchResponse,
        )
    ),
)]
pub struct ApiDoc;
