//! SearchResponse - Uniform success/error envelope

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use super::result::{CompanyInfo, SearchResult};

/// Envelope returned for every market search, whatever the outcome.
///
/// A failed envelope never carries results and always carries an error;
/// use [`SearchResponse::success`] and [`SearchResponse::failure`] to build one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub news: Vec<SearchResult>,
    #[serde(default)]
    pub company_info: Option<CompanyInfo>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn success(news: Vec<SearchResult>, company_info: Option<CompanyInfo>) -> Self {
        Self {
            success: true,
            news,
            company_info,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            news: Vec::new(),
            company_info: None,
            error: Some(error.into()),
        }
    }
}

// Failures serialize as `{success, error}` only; successes always carry `news`.
impl Serialize for SearchResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.success {
            let len = 2 + usize::from(self.company_info.is_some());
            let mut state = serializer.serialize_struct("SearchResponse", len)?;
            state.serialize_field("success", &true)?;
            state.serialize_field("news", &self.news)?;
            if let Some(info) = &self.company_info {
                state.serialize_field("companyInfo", info)?;
            }
            state.end()
        } else {
            let mut state = serializer.serialize_struct("SearchResponse", 2)?;
            state.serialize_field("success", &false)?;
            state.serialize_field("error", self.error.as_deref().unwrap_or("Failed to search"))?;
            state.end()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_omits_news() {
        let value = serde_json::to_value(SearchResponse::failure("Query is required")).unwrap();
        assert_eq!(value, json!({"success": false, "error": "Query is required"}));
    }

    #[test]
    fn test_empty_success_keeps_news() {
        let value = serde_json::to_value(SearchResponse::success(Vec::new(), None)).unwrap();
        assert_eq!(value, json!({"success": true, "news": []}));
    }

    #[test]
    fn test_success_with_company_info() {
        let response = SearchResponse::success(
            vec![SearchResult {
                title: "Apple Q4".to_string(),
                url: "https://www.bloomberg.com/x".to_string(),
                description: String::new(),
                source: "Bloomberg".to_string(),
                published_date: Some("2024-11-01".to_string()),
            }],
            Some(CompanyInfo {
                name: "Apple".to_string(),
                description: "Apple Inc. designs...".to_string(),
                sector: None,
            }),
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "news": [{
                    "title": "Apple Q4",
                    "url": "https://www.bloomberg.com/x",
                    "description": "",
                    "source": "Bloomberg",
                    "publishedDate": "2024-11-01"
                }],
                "companyInfo": {"name": "Apple", "description": "Apple Inc. designs..."}
            })
        );

        let parsed: SearchResponse = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn test_deserialize_failure_without_news() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"success":false,"error":"Search failed"}"#).unwrap();
        assert_eq!(parsed, SearchResponse::failure("Search failed"));
    }
}
