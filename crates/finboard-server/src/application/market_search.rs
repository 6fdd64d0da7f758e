//! Market Search Application Service (Use Case)
//!
//! validate -> build provider query -> one upstream call -> normalize.

use std::sync::Arc;

use finboard::{
    derive_company_info, normalize_results, ProviderQuery, SearchError, SearchProvider,
    SearchRequest, SearchResponse,
};

/// Application service for market searches
pub struct MarketSearchService<P: SearchProvider> {
    /// `None` when no provider credential was configured
    provider: Option<Arc<P>>,
}

impl<P: SearchProvider> MarketSearchService<P> {
    pub fn new(provider: Option<Arc<P>>) -> Self {
        Self { provider }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Run one market search.
    ///
    /// Zero results is a success. Errors carry their HTTP status and are turned
    /// into a failure envelope by the route.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let query = request.validated_query()?;
        let search_type = request.search_type();

        let Some(provider) = self.provider.as_ref() else {
            tracing::error!("❌ FIRECRAWL_API_KEY not configured");
            return Err(SearchError::not_configured());
        };

        tracing::info!("🔍 Searching for: {} (type: {})", query, search_type);

        let provider_query = ProviderQuery::new(search_type.build_query(query));
        let hits = provider
            .search(&provider_query)
            .await
            .inspect_err(log_failure)?;

        let news = normalize_results(&hits);
        let company_info = derive_company_info(search_type, query, &hits);

        tracing::info!("✅ Returning {} results", news.len());

        Ok(SearchResponse::success(news, company_info))
    }
}

fn log_failure(err: &SearchError) {
    match err {
        SearchError::Upstream { status, message } => {
            tracing::warn!("⚠️  Market search upstream failure ({}): {}", status, message)
        }
        other => tracing::error!("❌ Error in market search: {}", other),
    }
}
