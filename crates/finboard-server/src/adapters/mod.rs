//! Infrastructure Adapters
//!
//! Concrete implementations of the domain ports.

pub mod firecrawl;

pub use firecrawl::FirecrawlClient;
