//! Domain Entities
//!
//! Ephemeral models that live for a single search request.
//! - SearchRequest: inbound `{query, type}`
//! - SearchResult / CompanyInfo: normalized output
//! - SearchResponse: success/error envelope

mod request;
mod response;
mod result;

pub use request::*;
pub use response::*;
pub use result::*;
