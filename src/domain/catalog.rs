//! Records returned by the media catalog API.

use serde::{Deserialize, Serialize};

/// Envelope of a search or lookup response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    #[serde(default)]
    pub result_count: u32,

    #[serde(default)]
    pub results: Vec<CatalogResult>,
}

/// One catalog record (read-only input to artwork derivation)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResult {
    /// `collection`, `track`, `artist`, `audiobook`, ...
    pub wrapper_type: Option<String>,

    pub artist_name: Option<String>,

    pub collection_name: Option<String>,

    pub track_name: Option<String>,

    /// ISO 8601 timestamp, e.g. `2011-01-01T08:00:00Z`
    pub release_date: Option<String>,

    pub collection_view_url: Option<String>,

    pub track_view_url: Option<String>,

    pub artist_view_url: Option<String>,

    pub artwork_url60: Option<String>,

    pub artwork_url100: Option<String>,

    pub artwork_url512: Option<String>,
}

impl CatalogResult {
    /// Thumbnail URL template used for artwork derivation
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.artwork_url100
            .as_deref()
            .or(self.artwork_url60.as_deref())
            .or(self.artwork_url512.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Storefront page for this record
    pub fn view_url(&self) -> Option<&str> {
        self.collection_view_url
            .as_deref()
            .or(self.track_view_url.as_deref())
            .or(self.artist_view_url.as_deref())
    }
}
