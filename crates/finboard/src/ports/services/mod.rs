//! Service Ports
//!
//! Abstract interfaces for external services.

mod search_provider;

pub use search_provider::*;
