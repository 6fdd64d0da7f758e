//! SearchType - Market search category

use serde::Serialize;
use utoipa::ToSchema;

/// Category of a market search, selecting the provider query template.
///
/// `General` is the explicit default case: any unrecognized wire value lands
/// here instead of being rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    Company,
    Bank,
    Bond,
    General,
}

impl SearchType {
    /// Resolve the optional wire value. Absent means `Company`.
    pub fn from_wire(value: Option<&str>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Company => "company",
            SearchType::Bank => "bank",
            SearchType::Bond => "bond",
            SearchType::General => "general",
        }
    }

    /// Build the provider query string for a (trimmed) user query.
    pub fn build_query(&self, query: &str) -> String {
        match self {
            SearchType::Company => {
                format!("{query} stock news financial performance market analysis")
            }
            SearchType::Bank => {
                format!("{query} investment bank news deals acquisitions financial")
            }
            SearchType::Bond => format!("{query} bond yield credit rating fixed income market"),
            SearchType::General => format!("{query} financial news market analysis"),
        }
    }
}

impl From<&str> for SearchType {
    fn from(value: &str) -> Self {
        match value {
            "company" => SearchType::Company,
            "bank" => SearchType::Bank,
            "bond" => SearchType::Bond,
            _ => SearchType::General,
        }
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
