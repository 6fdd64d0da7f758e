//! Application Services (Use Cases)
//!
//! Orchestrate domain operations on top of the ports.

mod market_search;

pub use market_search::MarketSearchService;
