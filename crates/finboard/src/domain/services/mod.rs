//! Domain Services
//!
//! Stateless domain logic shared by the server and its tests.

mod normalization;

pub use normalization::*;
