//! REST client layer: wire types, error taxonomy, and endpoint wrappers.

pub mod api;
pub mod error;
pub mod types;
