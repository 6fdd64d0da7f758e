//! Search Routes - Market search via Firecrawl

use axum::{body::Bytes, extract::State, http::StatusCode, routing::post, Json, Router};

use finboard::{SearchError, SearchRequest, SearchResponse};

use crate::AppState;

/// Search for market news
///
/// The body is parsed here rather than by the `Json` extractor so that a
/// malformed body still yields the `{success: false, error}` envelope.
#[utoipa::path(
    post,
    path = "/market-search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Normalized search results", body = SearchResponse),
        (status = 400, description = "Query is required", body = SearchResponse),
        (status = 500, description = "Provider not configured or unexpected failure", body = SearchResponse),
        (status = 504, description = "Search provider timed out", body = SearchResponse),
    ),
    tag = "Search"
)]
pub async fn market_search(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<SearchResponse>) {
    let outcome = match serde_json::from_slice::<SearchRequest>(&body) {
        Ok(request) => state.market_search.search(&request).await,
        Err(e) => {
            tracing::error!("❌ Error in market search: invalid request body: {}", e);
            Err(SearchError::Unexpected(e.to_string()))
        }
    };

    match outcome {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(err) => {
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(SearchResponse::failure(err.client_message())))
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/market-search", post(market_search))
}
