//! Finboard API Routes
//!
//! - /market-search - Market news search (Firecrawl proxy)
//! - /swagger-ui - OpenAPI documentation

pub mod search;
pub mod swagger;
