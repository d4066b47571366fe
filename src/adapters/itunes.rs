//! iTunes Search API adapter.
//!
//! Free-text queries go to `/search`, identifier queries to `/lookup`.
//! When a relay is configured the catalog URL is handed to it as the `url`
//! query parameter instead of being requested directly.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::domain::{CatalogResponse, CatalogResult, ParsedQuery};

use super::{CatalogClient, CatalogError};

/// Public catalog endpoint
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";

/// Result-count cap per search
pub const DEFAULT_LIMIT: u32 = 60;

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Longest error body carried into a `CatalogError::Status`
const MAX_ERROR_BODY: usize = 200;

/// Connection settings for the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    pub base_url: String,
    pub relay_url: Option<String>,
    pub limit: u32,
    pub timeout_seconds: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            relay_url: None,
            limit: DEFAULT_LIMIT,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// iTunes Search API client
pub struct ItunesClient {
    settings: CatalogSettings,
    /// HTTP client
    client: reqwest::Client,
}

impl Default for ItunesClient {
    fn default() -> Self {
        Self::new(CatalogSettings::default())
    }
}

impl ItunesClient {
    /// Create a new client
    pub fn new(settings: CatalogSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    /// Catalog URL for a query, without the relay
    pub fn catalog_url(&self, query: &ParsedQuery) -> Result<Url, CatalogError> {
        let base = self.settings.base_url.trim_end_matches('/');

        let url = if query.direct_lookup {
            Url::parse_with_params(
                &format!("{}/lookup", base),
                &[("id", query.search_term.as_str()), ("country", query.country.as_str())],
            )?
        } else {
            let limit = self.settings.limit.to_string();
            let mut params = vec![
                ("term", query.search_term.as_str()),
                ("country", query.country.as_str()),
                ("media", query.media_kind.media()),
                ("entity", query.media_kind.entity()),
            ];
            if let Some(attribute) = query.attribute.param() {
                params.push(("attribute", attribute));
            }
            params.push(("limit", limit.as_str()));
            Url::parse_with_params(&format!("{}/search", base), &params)?
        };

        Ok(url)
    }

    /// URL actually requested, routed through the relay when configured
    pub fn request_url(&self, query: &ParsedQuery) -> Result<Url, CatalogError> {
        let catalog_url = self.catalog_url(query)?;
        match &self.settings.relay_url {
            Some(relay) => Ok(Url::parse_with_params(relay, &[("url", catalog_url.as_str())])?),
            None => Ok(catalog_url),
        }
    }
}

#[async_trait]
impl CatalogClient for ItunesClient {
    fn name(&self) -> &str {
        "itunes"
    }

    #[instrument(skip(self, query), fields(term = %query.search_term, kind = %query.media_kind, country = %query.country))]
    async fn search(&self, query: &ParsedQuery) -> Result<Vec<CatalogResult>, CatalogError> {
        let url = self.request_url(query)?;
        debug!(%url, "Requesting catalog");

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.settings.timeout_seconds))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Catalog request rejected");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let parsed: CatalogResponse = serde_json::from_str(&body)?;
        Ok(keep_with_artwork(parsed.results))
    }
}

/// Drop records that carry no thumbnail (e.g. artist wrappers in lookups)
fn keep_with_artwork(results: Vec<CatalogResult>) -> Vec<CatalogResult> {
    let total = results.len();
    let kept: Vec<_> = results
        .into_iter()
        .filter(|r| r.thumbnail_url().is_some())
        .collect();

    if kept.len() < total {
        debug!(dropped = total - kept.len(), "Skipped records without artwork");
    }
    kept
}
