//! Search execution.
//!
//! Wires the parser, a catalog client and the artwork deriver together:
//! raw text in, one [`ResultView`] per catalog record out. An empty result
//! list is reported as [`SearchOutcome::NoResults`], never as an error.

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::adapters::{CatalogClient, CatalogError};
use crate::domain::{ArtworkLinkSet, CatalogResult, ParsedQuery};

use super::deriver::derive_links;
use super::parser::parse;
use super::title::display_title;

/// One rendered search result
#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub title: String,
    pub view_url: Option<String>,
    pub release_date: Option<String>,
    pub artwork: ArtworkLinkSet,
}

impl ResultView {
    /// Build the view for a record under the query that produced it
    pub fn from_result(result: &CatalogResult, query: &ParsedQuery) -> Self {
        Self {
            title: display_title(result, query.media_kind),
            view_url: result.view_url().map(str::to_string),
            release_date: result.release_date.clone(),
            artwork: derive_links(result, query.media_kind, query.output_format),
        }
    }
}

/// Result of a successful catalog round trip
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    Results {
        query: ParsedQuery,
        results: Vec<ResultView>,
    },
    NoResults {
        query: ParsedQuery,
    },
}

impl SearchOutcome {
    pub fn query(&self) -> &ParsedQuery {
        match self {
            SearchOutcome::Results { query, .. } | SearchOutcome::NoResults { query } => query,
        }
    }

    pub fn results(&self) -> &[ResultView] {
        match self {
            SearchOutcome::Results { results, .. } => results,
            SearchOutcome::NoResults { .. } => &[],
        }
    }
}

/// Artwork search over a catalog backend
pub struct ArtworkSearch<C> {
    client: C,
}

impl<C: CatalogClient> ArtworkSearch<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Parse `raw` and run it against the catalog
    pub async fn search(&self, raw: &str) -> Result<SearchOutcome, CatalogError> {
        self.run(parse(raw)).await
    }

    /// Run an already parsed query
    #[instrument(skip(self, query), fields(backend = self.client.name()))]
    pub async fn run(&self, query: ParsedQuery) -> Result<SearchOutcome, CatalogError> {
        info!(
            term = %query.search_term,
            kind = %query.media_kind,
            country = %query.country,
            lookup = query.direct_lookup,
            "Searching catalog"
        );

        let records = match self.client.search(&query).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Catalog search failed: {}", e);
                return Err(e);
            }
        };

        if records.is_empty() {
            info!("No results");
            return Ok(SearchOutcome::NoResults { query });
        }

        let results: Vec<_> = records
            .iter()
            .map(|record| ResultView::from_result(record, &query))
            .collect();
        info!(count = results.len(), "Search completed");

        Ok(SearchOutcome::Results { query, results })
    }
}
