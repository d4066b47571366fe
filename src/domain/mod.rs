//! Domain types for artfinder.
//!
//! This module contains the core data structures:
//! - Query: Structured search requests
//! - Catalog: Records returned by the catalog API
//! - Artwork: Derived download links

pub mod artwork;
pub mod catalog;
pub mod query;

// Re-export commonly used types
pub use artwork::{ArtworkLink, ArtworkLinkSet};
pub use catalog::{CatalogResponse, CatalogResult};
pub use query::{Attribute, MediaKind, OutputFormat, ParsedQuery, DEFAULT_COUNTRY};
