//! Adapter interfaces for external systems.
//!
//! Adapters provide a unified interface for fetching records from a media
//! catalog. The core only sees [`CatalogClient`].

pub mod itunes;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{CatalogResult, ParsedQuery};

// Re-export the iTunes adapter
pub use itunes::{CatalogSettings, ItunesClient};

/// Failure talking to the catalog
///
/// The `Display` text is shown to users as-is.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Catalog returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Trait for media catalog backends
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Human-readable backend name
    fn name(&self) -> &str;

    /// Search by term, or look up by identifier when `query.direct_lookup`
    async fn search(&self, query: &ParsedQuery) -> Result<Vec<CatalogResult>, CatalogError>;
}
