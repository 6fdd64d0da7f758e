//! Search Provider Port
//!
//! Abstract interface for the external web search / crawl API.

use async_trait::async_trait;

use crate::domain::errors::SearchError;

/// Recency window applied by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recency {
    PastWeek,
}

impl Recency {
    /// Time-based search filter code (`tbs`) understood by the provider.
    pub fn as_tbs(&self) -> &'static str {
        match self {
            Recency::PastWeek => "qdr:w",
        }
    }
}

/// Query sent to the search provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderQuery {
    pub query: String,
    pub limit: usize,
    pub recency: Recency,
    /// Ask for markdown page content with each result
    pub include_markdown: bool,
}

impl ProviderQuery {
    pub const DEFAULT_LIMIT: usize = 10;

    /// Market search defaults: 10 results from the past week, with markdown.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: Self::DEFAULT_LIMIT,
            recency: Recency::PastWeek,
            include_markdown: true,
        }
    }
}

/// Raw result as returned by the provider. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSearchHit {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub markdown: Option<String>,
    pub published_date: Option<String>,
}

impl RawSearchHit {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_markdown(mut self, markdown: impl Into<String>) -> Self {
        self.markdown = Some(markdown.into());
        self
    }

    pub fn with_published_date(mut self, date: impl Into<String>) -> Self {
        self.published_date = Some(date.into());
        self
    }
}

/// Service interface for the upstream search provider
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one search. Implementations make exactly one upstream call and never retry.
    async fn search(&self, query: &ProviderQuery) -> Result<Vec<RawSearchHit>, SearchError>;
}
