//! Finboard Domain Library
//!
//! Core domain types and interfaces for the Finboard market search proxy.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Request, result and envelope models
//!   - `value_objects/`: Immutable value types (SearchType)
//!   - `services/`: Result normalization
//!   - `errors/`: Search error taxonomy
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External search provider interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use finboard::{SearchRequest, SearchType, SearchProvider, ProviderQuery};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    derive_company_info, derive_source, normalize_hit, normalize_results, CompanyInfo,
    SearchError, SearchRequest, SearchResponse, SearchResult, SearchType,
};
pub use ports::{ProviderQuery, RawSearchHit, Recency, SearchProvider};
