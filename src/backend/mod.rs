//! Generative search backend: HTTP transport, client, and wire types

pub mod api;
pub mod error;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use api::{validate_query, SearchClient};
pub use error::SearchError;
pub use types::{SearchResult, Source};
