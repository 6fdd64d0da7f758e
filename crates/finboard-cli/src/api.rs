//! Finboard API Client

use anyhow::{Context, Result};
use reqwest::Client;

use finboard::{SearchRequest, SearchResponse, SearchType};

/// API Client for the Finboard market search proxy
pub struct MarketSearchClient {
    client: Client,
    base_url: String,
}

impl MarketSearchClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Finboard API")?;
        Ok(resp.status().is_success())
    }

    /// Search market news.
    ///
    /// Never fails: transport errors and unreadable bodies come back as a
    /// failure envelope, like any server-side error.
    pub async fn search(&self, query: &str, search_type: SearchType) -> SearchResponse {
        match self.try_search(query, search_type).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("Market search error: {:#}", err);
                SearchResponse::failure(format!("{:#}", err))
            }
        }
    }

    async fn try_search(&self, query: &str, search_type: SearchType) -> Result<SearchResponse> {
        let url = format!("{}/market-search", self.base_url);
        let request = SearchRequest::new(query, search_type);

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Finboard API")?;

        // Error statuses still carry the envelope
        let status = resp.status();
        let body = resp.text().await.context("Failed to read response")?;
        tracing::debug!("market-search responded {}", status);

        serde_json::from_str(&body)
            .with_context(|| format!("Unexpected response ({}): {}", status, body))
    }
}
