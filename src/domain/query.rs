//! Structured search queries.
//!
//! A `ParsedQuery` is produced once per search submission by
//! [`crate::core::parser::parse`] and is never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Default storefront region
pub const DEFAULT_COUNTRY: &str = "us";

/// Kind of media being searched for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaKind {
    #[default]
    Album,
    Song,
    Movie,
    TvSeason,
    Software,
    Audiobook,
    Ebook,
}

impl MediaKind {
    /// Value of the catalog `media` parameter
    pub fn media(self) -> &'static str {
        match self {
            MediaKind::Album | MediaKind::Song => "music",
            MediaKind::Movie => "movie",
            MediaKind::TvSeason => "tvShow",
            MediaKind::Software => "software",
            MediaKind::Audiobook => "audiobook",
            MediaKind::Ebook => "ebook",
        }
    }

    /// Value of the catalog `entity` parameter
    pub fn entity(self) -> &'static str {
        match self {
            MediaKind::Album => "album",
            MediaKind::Song => "song",
            MediaKind::Movie => "movie",
            MediaKind::TvSeason => "tvSeason",
            MediaKind::Software => "software",
            MediaKind::Audiobook => "audiobook",
            MediaKind::Ebook => "ebook",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Album => write!(f, "album"),
            MediaKind::Song => write!(f, "song"),
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::TvSeason => write!(f, "tvSeason"),
            MediaKind::Software => write!(f, "software"),
            MediaKind::Audiobook => write!(f, "audiobook"),
            MediaKind::Ebook => write!(f, "ebook"),
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "album" => Ok(MediaKind::Album),
            "song" => Ok(MediaKind::Song),
            "movie" => Ok(MediaKind::Movie),
            "tv" | "tvseason" => Ok(MediaKind::TvSeason),
            "app" | "software" => Ok(MediaKind::Software),
            "audiobook" => Ok(MediaKind::Audiobook),
            "ebook" | "book" => Ok(MediaKind::Ebook),
            _ => anyhow::bail!("Unknown media kind: {}", s),
        }
    }
}

/// Catalog search-field restriction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    #[default]
    None,
    ArtistTerm,
    TitleTerm,
    AuthorTerm,
    DirectorTerm,
    ActorTerm,
    ComposerTerm,
}

impl Attribute {
    /// Value of the catalog `attribute` parameter (`None` when unrestricted)
    pub fn param(self) -> Option<&'static str> {
        match self {
            Attribute::None => None,
            Attribute::ArtistTerm => Some("artistTerm"),
            Attribute::TitleTerm => Some("titleTerm"),
            Attribute::AuthorTerm => Some("authorTerm"),
            Attribute::DirectorTerm => Some("directorTerm"),
            Attribute::ActorTerm => Some("actorTerm"),
            Attribute::ComposerTerm => Some("composerTerm"),
        }
    }
}

/// Image format requested from the CDN
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Jpg,
    Png,
}

impl OutputFormat {
    /// File extension without the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpg => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().trim_start_matches('.') {
            "jpg" | "jpeg" => Ok(OutputFormat::Jpg),
            "png" => Ok(OutputFormat::Png),
            _ => anyhow::bail!("Unknown output format: {}", s),
        }
    }
}

/// A fully resolved search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    /// Remaining text after prefixes and the format modifier are stripped
    pub search_term: String,

    pub media_kind: MediaKind,

    pub attribute: Attribute,

    /// Two-letter storefront region code
    pub country: String,

    pub output_format: OutputFormat,

    /// Resolve `search_term` as a catalog identifier instead of free text
    pub direct_lookup: bool,
}

impl Default for ParsedQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            media_kind: MediaKind::default(),
            attribute: Attribute::default(),
            country: DEFAULT_COUNTRY.to_string(),
            output_format: OutputFormat::default(),
            direct_lookup: false,
        }
    }
}

impl ParsedQuery {
    /// Whether there is anything to search for
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = ParsedQuery::default();
        assert_eq!(query.media_kind, MediaKind::Album);
        assert_eq!(query.attribute, Attribute::None);
        assert_eq!(query.country, "us");
        assert_eq!(query.output_format, OutputFormat::Jpg);
        assert!(!query.direct_lookup);
        assert!(query.is_empty());
    }

    #[test]
    fn test_catalog_params() {
        assert_eq!(MediaKind::TvSeason.media(), "tvShow");
        assert_eq!(MediaKind::TvSeason.entity(), "tvSeason");
        assert_eq!(MediaKind::Song.media(), "music");
        assert_eq!(Attribute::None.param(), None);
        assert_eq!(Attribute::DirectorTerm.param(), Some("directorTerm"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let query = ParsedQuery {
            media_kind: MediaKind::TvSeason,
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["mediaKind"], "tvSeason");
        assert_eq!(json["outputFormat"], "jpg");
        assert_eq!(json["directLookup"], false);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("app".parse::<MediaKind>().unwrap(), MediaKind::Software);
        assert_eq!("PNG".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!(".jpeg".parse::<OutputFormat>().unwrap(), OutputFormat::Jpg);
        assert!("vinyl".parse::<MediaKind>().is_err());
    }
}
