//! SearchResult / CompanyInfo - Normalized search output

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One normalized news/search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub description: String,
    /// Publisher name derived from the URL host
    pub source: String,
    /// Provider-supplied, format not validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

/// Basic company profile, only produced for company searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompanyInfo {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}
