//! Core query and artwork logic.
//!
//! This module contains:
//! - Parser: Raw text to structured queries
//! - Prefixes: Country, media-kind and attribute prefix tables
//! - ArtworkUrl: CDN URL value type
//! - Deriver: Per-kind artwork download links
//! - Title: Display titles for results
//! - Search: Catalog round trip
//!
//! Everything except `search` is pure and synchronous.

pub mod artwork_url;
pub mod deriver;
pub mod parser;
pub mod prefixes;
pub mod search;
pub mod title;

// Re-export commonly used types
pub use artwork_url::{ArtworkUrl, Size};
pub use deriver::{derive_from_template, derive_links, max_resolution_url, resize};
pub use parser::parse;
pub use search::{ArtworkSearch, ResultView, SearchOutcome};
pub use title::display_title;
