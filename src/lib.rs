//! artfinder - Full-size artwork finder for a public media catalog
//!
//! Turns a free-form query into a catalog search and derives progressively
//! larger artwork URLs for every result by rewriting the CDN thumbnail URL.
//!
//! # Architecture
//!
//! Two pure components composed through a catalog client:
//! - The parser turns raw text into a `ParsedQuery`
//! - The catalog client executes the query (search or lookup)
//! - The deriver turns each record's thumbnail into an `ArtworkLinkSet`
//!
//! # Modules
//!
//! - `adapters`: Catalog backends (iTunes Search API)
//! - `core`: Parser, artwork URL derivation, titles, search service
//! - `domain`: Data structures (ParsedQuery, CatalogResult, ArtworkLinkSet)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Search with country, attribute and format modifiers
//! artfinder search "uk: artist: Coldplay .png"
//!
//! # Look up a storefront URL directly
//! artfinder search https://apps.apple.com/us/app/instagram/id389801252
//!
//! # Inspect parsing
//! artfinder parse "tv: Severance"
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;

// Re-export main types at crate root for convenience
pub use crate::adapters::{CatalogClient, CatalogError, CatalogSettings, ItunesClient};
pub use crate::core::{derive_links, parse, resize, ArtworkSearch, ResultView, SearchOutcome};
pub use crate::domain::{
    ArtworkLink, ArtworkLinkSet, Attribute, CatalogResult, MediaKind, OutputFormat, ParsedQuery,
};
