//! Result Normalization
//!
//! Maps heterogeneous provider results onto the fixed `SearchResult` shape.
//! The fallbacks here (`"Result N"` titles, `"Web"` source) are part of the
//! response contract.

use url::Url;

use crate::domain::entities::{CompanyInfo, SearchResult};
use crate::domain::value_objects::SearchType;
use crate::ports::RawSearchHit;

/// Characters of markdown used when a result has no description
pub const DESCRIPTION_EXCERPT_CHARS: usize = 200;

/// Characters of markdown kept for the company description
pub const COMPANY_DESCRIPTION_CHARS: usize = 500;

/// Source used when the URL has no parsable host
pub const FALLBACK_SOURCE: &str = "Web";

/// Normalize all hits, preserving provider order.
pub fn normalize_results(hits: &[RawSearchHit]) -> Vec<SearchResult> {
    hits.iter()
        .enumerate()
        .map(|(index, hit)| normalize_hit(index, hit))
        .collect()
}

/// Normalize a single hit. `index` is 0-based.
pub fn normalize_hit(index: usize, hit: &RawSearchHit) -> SearchResult {
    let url = hit.url.clone().unwrap_or_default();

    let title = non_empty(&hit.title)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Result {}", index + 1));

    let description = non_empty(&hit.description)
        .map(str::to_string)
        .or_else(|| {
            non_empty(&hit.markdown).map(|md| truncate_chars(md, DESCRIPTION_EXCERPT_CHARS))
        })
        .unwrap_or_default();

    SearchResult {
        title,
        source: derive_source(&url),
        url,
        description,
        published_date: hit.published_date.clone(),
    }
}

/// Publisher name from a URL: host without a leading `www.`, first label,
/// first character uppercased. `"Web"` when there is no host to parse.
pub fn derive_source(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return FALLBACK_SOURCE.to_string();
    };
    let Some(host) = parsed.host_str() else {
        return FALLBACK_SOURCE.to_string();
    };

    let host = host.strip_prefix("www.").unwrap_or(host);
    let label = host.split('.').next().unwrap_or_default();

    capitalize(label)
}

/// Company profile from the first raw hit's markdown.
///
/// Only for company searches; `None` when there are no hits or the first
/// hit carries no markdown.
pub fn derive_company_info(
    search_type: SearchType,
    query: &str,
    hits: &[RawSearchHit],
) -> Option<CompanyInfo> {
    if search_type != SearchType::Company {
        return None;
    }

    let markdown = non_empty(&hits.first()?.markdown)?;

    Some(CompanyInfo {
        name: query.to_string(),
        description: truncate_chars(markdown, COMPANY_DESCRIPTION_CHARS),
        sector: None,
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
