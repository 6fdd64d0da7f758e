//! SearchRequest - Inbound market search request

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::errors::SearchError;
use crate::domain::value_objects::SearchType;

/// Market search request as received on the wire.
///
/// Both fields are optional here so that a missing query is reported as a
/// validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// One of `company`, `bank`, `bond`. Defaults to `company`.
    #[serde(
        default,
        rename = "type",
        deserialize_with = "lenient_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_type: Option<String>,
}

/// Strings are kept, `null` is absent, any other JSON value is kept as its
/// JSON text and so resolves to the general template.
fn lenient_type<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, search_type: SearchType) -> Self {
        Self {
            query: Some(query.into()),
            search_type: Some(search_type.as_str().to_string()),
        }
    }

    /// The trimmed query, or a validation error if it is missing or blank.
    pub fn validated_query(&self) -> Result<&str, SearchError> {
        match self.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => Ok(query),
            _ => Err(SearchError::query_required()),
        }
    }

    pub fn search_type(&self) -> SearchType {
        SearchType::from_wire(self.search_type.as_deref())
    }
}
