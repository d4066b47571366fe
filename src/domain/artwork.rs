//! Derived artwork download links.

use serde::{Deserialize, Serialize};

/// Label used for the maximum-resolution link
pub const MAX_LABEL: &str = "Max";

/// A single downloadable artwork URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkLink {
    pub label: String,
    pub url: String,
}

impl ArtworkLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Ordered artwork links for one catalog result
///
/// The maximum-resolution link is always last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkLinkSet {
    /// Links in display order, smallest first
    pub links: Vec<ArtworkLink>,

    /// Small image suitable for rendering inline
    pub preview: String,
}

impl ArtworkLinkSet {
    /// URL of the maximum-resolution link
    pub fn max_resolution(&self) -> Option<&str> {
        self.links.last().map(|link| link.url.as_str())
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtworkLink> {
        self.links.iter()
    }
}
