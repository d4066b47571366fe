//! Query parser.
//!
//! Decomposes a raw user-entered string into a [`ParsedQuery`]:
//!
//! ```text
//! uk: artist: Coldplay .png
//! └┬┘ └──┬──┘ └──┬───┘ └┬─┘
//!  │     │       │      └─ output format
//!  │     │       └──────── search term
//!  │     └──────────────── attribute (implies album)
//!  └────────────────────── country (uk -> gb)
//! ```
//!
//! Prefixes are recognized only at the start of the remaining text, in the
//! fixed order country, media kind, attribute. A storefront URL anywhere in
//! the input overrides all textual prefixes and turns the query into a
//! direct lookup. Parsing never fails; unrecognized input is a plain album
//! search in the US storefront.

use url::Url;

use crate::domain::{Attribute, MediaKind, OutputFormat, ParsedQuery};

use super::prefixes::{match_prefix, ATTRIBUTE_PREFIXES, COUNTRY_PREFIXES, MEDIA_PREFIXES};

/// Format modifier token
const PNG_TOKEN: &str = ".png";

/// Hosts whose URLs carry a catalog identifier
const STOREFRONT_HOSTS: &[&str] = &["itunes.apple.com", "apps.apple.com", "books.apple.com"];

/// Parse a raw query string
pub fn parse(raw: &str) -> ParsedQuery {
    let mut query = ParsedQuery::default();

    let (text, png) = strip_format_token(raw);
    if png {
        query.output_format = OutputFormat::Png;
    }

    if let Some(link) = find_storefront_link(&text) {
        query.search_term = link.id;
        query.media_kind = link.media_kind;
        query.attribute = Attribute::None;
        query.direct_lookup = true;
        if let Some(country) = link.country {
            query.country = country;
        }
        return query;
    }

    let mut term = text.trim();

    if let Some((&(_, country), rest)) = match_prefix(term, COUNTRY_PREFIXES, |(t, _)| *t) {
        query.country = country.to_string();
        term = rest;
    }

    let mut explicit_kind = false;
    if let Some((&(_, kind), rest)) = match_prefix(term, MEDIA_PREFIXES, |(t, _)| *t) {
        query.media_kind = kind;
        explicit_kind = true;
        term = rest;
    }

    if let Some((&(_, attribute, implied_kind), rest)) =
        match_prefix(term, ATTRIBUTE_PREFIXES, |(t, _, _)| *t)
    {
        query.attribute = attribute;
        if !explicit_kind {
            query.media_kind = implied_kind;
        }
        term = rest;
    }

    // A second pass catches tokens that only form once prefixes are gone
    let (term, png) = strip_format_token(term);
    if png {
        query.output_format = OutputFormat::Png;
    }

    query.search_term = term.trim().to_string();
    query.direct_lookup = is_catalog_id(&query.search_term);
    query
}

/// Remove every `.png` token (case-insensitive), reporting whether any was found
///
/// Tokens inside words are removed too: `cover.pngs` becomes `covers`.
fn strip_format_token(text: &str) -> (String, bool) {
    let lower = text.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut found = false;
    let mut cursor = 0;

    while let Some(pos) = lower[cursor..].find(PNG_TOKEN) {
        let start = cursor + pos;
        out.push_str(&text[cursor..start]);
        cursor = start + PNG_TOKEN.len();
        found = true;
    }
    out.push_str(&text[cursor..]);

    (out, found)
}

/// Whether a term is a bare numeric catalog identifier
fn is_catalog_id(term: &str) -> bool {
    !term.is_empty() && term.bytes().all(|b| b.is_ascii_digit())
}

/// Catalog reference extracted from a storefront URL
#[derive(Debug, Clone, PartialEq, Eq)]
struct StorefrontLink {
    id: String,
    media_kind: MediaKind,
    country: Option<String>,
}

/// Find the first storefront URL in `text` that embeds an `id{digits}` segment
fn find_storefront_link(text: &str) -> Option<StorefrontLink> {
    text.split_whitespace().find_map(|word| {
        // ASCII lowercasing keeps byte offsets valid for `word`
        let start = word.to_ascii_lowercase().find("http")?;
        let url = Url::parse(&word[start..]).ok()?;
        storefront_link(&url)
    })
}

fn storefront_link(url: &Url) -> Option<StorefrontLink> {
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?;
    if !STOREFRONT_HOSTS.contains(&host) {
        return None;
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    let id = segments.iter().rev().find_map(|segment| {
        let digits = segment.strip_prefix("id")?;
        is_catalog_id(digits).then(|| digits.to_string())
    })?;

    let country = segments
        .first()
        .filter(|s| s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic()))
        .map(|s| s.to_ascii_lowercase());

    Some(StorefrontLink {
        id,
        media_kind: media_kind_for_path(url.path()),
        country,
    })
}

fn media_kind_for_path(path: &str) -> MediaKind {
    let path = format!("{}/", path.to_ascii_lowercase());
    if path.contains("/app/") {
        MediaKind::Software
    } else if path.contains("/movie/") {
        MediaKind::Movie
    } else if path.contains("/tv-season/") || path.contains("/tvshow/") {
        MediaKind::TvSeason
    } else if path.contains("/audiobook/") {
        MediaKind::Audiobook
    } else if path.contains("/book/") || path.contains("/books/") {
        MediaKind::Ebook
    } else {
        MediaKind::Album
    }
}
