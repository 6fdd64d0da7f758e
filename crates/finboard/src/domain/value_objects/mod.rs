//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod search_type;

pub use search_type::*;
