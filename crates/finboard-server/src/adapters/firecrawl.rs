//! Firecrawl Search Adapter
//!
//! Implements `SearchProvider` against Firecrawl's `/v1/search` endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use finboard::{ProviderQuery, RawSearchHit, SearchError, SearchProvider};

use crate::config::FirecrawlConfig;

const UPSTREAM_FALLBACK_ERROR: &str = "Search failed";

/// HTTP client for Firecrawl search
#[derive(Clone)]
pub struct FirecrawlClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl FirecrawlClient {
    /// Build a client from configuration. Fails with a configuration error
    /// when no API key is set.
    pub fn new(config: &FirecrawlConfig) -> Result<Self, SearchError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(SearchError::not_configured)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("finboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| SearchError::Unexpected(err.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    fn map_transport_error(&self, err: reqwest::Error) -> SearchError {
        if err.is_timeout() {
            SearchError::Timeout(self.timeout)
        } else {
            SearchError::Unexpected(err.to_string())
        }
    }
}

#[async_trait]
impl SearchProvider for FirecrawlClient {
    async fn search(&self, query: &ProviderQuery) -> Result<Vec<RawSearchHit>, SearchError> {
        let url = format!("{}/v1/search", self.base_url);
        let request = SearchRequestBody::from(query);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| self.map_transport_error(err))?;

        let status = response.status();
        tracing::info!("Firecrawl response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("⚠️  Firecrawl search error ({}): {}", status, body);
            return Err(map_http_error(status, &body));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| self.map_transport_error(err))?;

        Ok(extract_hits(&payload))
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequestBody<'a> {
    query: &'a str,
    limit: usize,
    tbs: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    scrape_options: Option<ScrapeOptions>,
}

#[derive(Debug, Serialize)]
struct ScrapeOptions {
    formats: Vec<&'static str>,
}

impl<'a> From<&'a ProviderQuery> for SearchRequestBody<'a> {
    fn from(query: &'a ProviderQuery) -> Self {
        Self {
            query: &query.query,
            limit: query.limit,
            tbs: query.recency.as_tbs(),
            scrape_options: query.include_markdown.then(|| ScrapeOptions {
                formats: vec!["markdown"],
            }),
        }
    }
}

// ============================================
// Helper Functions
// ============================================

/// Hits from `data`, in provider order. A field of an unexpected type is
/// stringified when scalar and dropped otherwise; the hit itself is kept.
fn extract_hits(root: &Value) -> Vec<RawSearchHit> {
    let Some(items) = root.get("data").and_then(|data| data.as_array()) else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| RawSearchHit {
            title: text_field(item, "title"),
            url: text_field(item, "url"),
            description: text_field(item, "description"),
            markdown: text_field(item, "markdown"),
            published_date: text_field(item, "publishedDate"),
        })
        .collect()
}

fn text_field(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Upstream non-2xx: keep the status, prefer Firecrawl's own `error` string.
fn map_http_error(status: StatusCode, body: &str) -> SearchError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.as_str())
                .filter(|msg| !msg.is_empty())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| UPSTREAM_FALLBACK_ERROR.to_string());

    SearchError::Upstream {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, timeout: Duration) -> FirecrawlClient {
        let config = FirecrawlConfig::new("fc-test")
            .with_base_url(server.uri())
            .with_timeout(timeout);
        FirecrawlClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_request_shape_and_hits() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/search"))
            .and(header("authorization", "Bearer fc-test"))
            .and(body_json(json!({
                "query": "Apple stock news financial performance market analysis",
                "limit": 10,
                "tbs": "qdr:w",
                "scrapeOptions": {"formats": ["markdown"]}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [
                    {
                        "url": "https://www.bloomberg.com/x",
                        "title": "Apple Q4",
                        "markdown": "# Apple",
                        "publishedDate": "2024-11-01"
                    },
                    {"url": "https://reuters.com/y", "description": null}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let query = ProviderQuery::new("Apple stock news financial performance market analysis");
        let hits = client.search(&query).await.unwrap();

        assert_eq!(
            hits,
            vec![
                RawSearchHit::new("https://www.bloomberg.com/x")
                    .with_title("Apple Q4")
                    .with_markdown("# Apple")
                    .with_published_date("2024-11-01"),
                RawSearchHit::new("https://reuters.com/y"),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_data_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let hits = client.search(&ProviderQuery::new("q")).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_message_and_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(402)
                    .set_body_json(json!({"success": false, "error": "Insufficient credits"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let err = client.search(&ProviderQuery::new("q")).await.unwrap_err();
        assert_eq!(
            err,
            SearchError::Upstream {
                status: 402,
                message: "Insufficient credits".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_upstream_error_without_json_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let err = client.search(&ProviderQuery::new("q")).await.unwrap_err();
        assert_eq!(
            err,
            SearchError::Upstream {
                status: 503,
                message: "Search failed".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_unexpected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let err = client.search(&ProviderQuery::new("q")).await.unwrap_err();
        assert!(matches!(err, SearchError::Unexpected(_)));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": []}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_millis(100));
        let err = client.search(&ProviderQuery::new("q")).await.unwrap_err();
        assert_eq!(err, SearchError::Timeout(Duration::from_millis(100)));
        assert_eq!(err.status_code(), 504);
    }

    #[tokio::test]
    async fn test_mistyped_fields_keep_every_hit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"url": "https://www.reuters.com/a", "title": "A", "publishedDate": 1730419200},
                    {"url": "https://ft.com/b", "title": 42, "description": {"text": "nested"}},
                    {"url": "https://wsj.com/c", "title": "C"}
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let hits = client.search(&ProviderQuery::new("q")).await.unwrap();

        assert_eq!(
            hits,
            vec![
                RawSearchHit::new("https://www.reuters.com/a")
                    .with_title("A")
                    .with_published_date("1730419200"),
                RawSearchHit::new("https://ft.com/b").with_title("42"),
                RawSearchHit::new("https://wsj.com/c").with_title("C"),
            ]
        );
    }

    #[test]
    fn test_new_requires_api_key() {
        let err = FirecrawlClient::new(&FirecrawlConfig::default()).err();
        assert_eq!(err, Some(SearchError::not_configured()));

        let blank = FirecrawlConfig::new("  ");
        assert!(FirecrawlClient::new(&blank).is_err());
    }

    #[test]
    fn test_non_array_data_is_empty() {
        assert!(extract_hits(&json!({"data": {"url": "https://a.com"}})).is_empty());
        assert!(extract_hits(&json!([])).is_empty());
    }

    #[test]
    fn test_map_http_error_ignores_non_string_error() {
        let err = map_http_error(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"code":"bad_request"}}"#,
        );
        assert_eq!(err.client_message(), "Search failed");
        assert_eq!(err.status_code(), 400);
    }
}
