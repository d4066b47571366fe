//! Query Parser Integration Tests
//!
//! Tests for prefix grammar, precedence, storefront URLs and format detection.

use artfinder::core::prefixes::COUNTRY_PREFIXES;
use artfinder::{parse, Attribute, MediaKind, OutputFormat, ParsedQuery};

#[test]
fn test_plain_term_uses_defaults() {
    let query = parse("  Abbey Road  ");
    assert_eq!(
        query,
        ParsedQuery {
            search_term: "Abbey Road".to_string(),
            ..Default::default()
        }
    );
}

#[test]
fn test_every_country_prefix() {
    for (token, country) in COUNTRY_PREFIXES {
        let query = parse(&format!("{}x", token));
        assert_eq!(query.country, *country, "prefix {}", token);
        assert_eq!(query.search_term, "x", "prefix {}", token);
    }
}

#[test]
fn test_country_prefix_is_case_insensitive() {
    let query = parse("UK: Oasis");
    assert_eq!(query.country, "gb");
    assert_eq!(query.search_term, "Oasis");

    let query = parse("Jp:Perfume");
    assert_eq!(query.country, "jp");
    assert_eq!(query.search_term, "Perfume");
}

#[test]
fn test_artist_prefix() {
    let query = parse("artist: The Beatles");
    assert_eq!(query.attribute, Attribute::ArtistTerm);
    assert_eq!(query.media_kind, MediaKind::Album);
    assert_eq!(query.search_term, "The Beatles");
    assert_eq!(query.country, "us");
    assert_eq!(query.output_format, OutputFormat::Jpg);
}

#[test]
fn test_app_prefix_with_numeric_term() {
    let query = parse("app: 284882215");
    assert_eq!(query.media_kind, MediaKind::Software);
    assert_eq!(query.search_term, "284882215");
    assert_eq!(query.country, "us");
    assert_eq!(query.attribute, Attribute::None);
    assert!(query.direct_lookup);
}

#[test]
fn test_all_prefix_categories_with_format() {
    let query = parse("uk: artist: Coldplay .png");
    assert_eq!(query.country, "gb");
    assert_eq!(query.attribute, Attribute::ArtistTerm);
    assert_eq!(query.media_kind, MediaKind::Album);
    assert_eq!(query.search_term, "Coldplay");
    assert_eq!(query.output_format, OutputFormat::Png);
    assert!(!query.direct_lookup);
}

#[test]
fn test_format_token_before_prefixes() {
    let query = parse(".PNG de: movie: Lola rennt");
    assert_eq!(query.output_format, OutputFormat::Png);
    assert_eq!(query.country, "de");
    assert_eq!(query.media_kind, MediaKind::Movie);
    assert_eq!(query.search_term, "Lola rennt");
}

#[test]
fn test_explicit_kind_suppresses_attribute_kind() {
    let query = parse("song: composer: Hans Zimmer");
    assert_eq!(query.media_kind, MediaKind::Song);
    assert_eq!(query.attribute, Attribute::ComposerTerm);
    assert_eq!(query.search_term, "Hans Zimmer");
}

#[test]
fn test_attribute_implies_kind() {
    assert_eq!(parse("author: Frank Herbert").media_kind, MediaKind::Audiobook);
    assert_eq!(parse("director: Michael Mann").media_kind, MediaKind::Movie);
    assert_eq!(parse("actor: Al Pacino").media_kind, MediaKind::Movie);
    assert_eq!(parse("title: Kid A").media_kind, MediaKind::Album);
}

#[test]
fn test_media_prefixes() {
    assert_eq!(parse("tv: Severance").media_kind, MediaKind::TvSeason);
    assert_eq!(parse("ebook: Dune").media_kind, MediaKind::Ebook);
    assert_eq!(parse("audiobook: Dune").media_kind, MediaKind::Audiobook);
    assert_eq!(parse("song: Yellow").media_kind, MediaKind::Song);
}

#[test]
fn test_prefixes_only_match_in_order() {
    // Attribute before country: the country token is no longer at the start
    let query = parse("artist: uk: Blur");
    assert_eq!(query.country, "us");
    assert_eq!(query.attribute, Attribute::ArtistTerm);
    assert_eq!(query.search_term, "uk: Blur");
}

#[test]
fn test_prefix_consumed_once() {
    let query = parse("uk: uk: Blur");
    assert_eq!(query.country, "gb");
    assert_eq!(query.search_term, "uk: Blur");
}

#[test]
fn test_no_mid_string_prefixes() {
    let query = parse("Best of artist: Queen");
    assert_eq!(query.attribute, Attribute::None);
    assert_eq!(query.search_term, "Best of artist: Queen");
}

#[test]
fn test_prefix_requires_colon() {
    let query = parse("uk garage");
    assert_eq!(query.country, "us");
    assert_eq!(query.search_term, "uk garage");
}

#[test]
fn test_storefront_app_url() {
    let query = parse("https://apps.apple.com/us/app/instagram/id389801252");
    assert!(query.direct_lookup);
    assert_eq!(query.media_kind, MediaKind::Software);
    assert_eq!(query.search_term, "389801252");
    assert_eq!(query.attribute, Attribute::None);
}

#[test]
fn test_storefront_url_ignores_textual_prefixes() {
    let query = parse("artist: movie: https://itunes.apple.com/us/movie/heat/id1439420231 .png");
    assert!(query.direct_lookup);
    assert_eq!(query.media_kind, MediaKind::Movie);
    assert_eq!(query.attribute, Attribute::None);
    assert_eq!(query.search_term, "1439420231");
    assert_eq!(query.output_format, OutputFormat::Png);
}

#[test]
fn test_storefront_url_country() {
    let query = parse("https://itunes.apple.com/gb/album/parachutes/id1122782080");
    assert_eq!(query.media_kind, MediaKind::Album);
    assert_eq!(query.country, "gb");
}

#[test]
fn test_empty_after_stripping() {
    let query = parse("uk: artist:");
    assert_eq!(query.country, "gb");
    assert_eq!(query.attribute, Attribute::ArtistTerm);
    assert!(query.is_empty());

    assert!(parse("   ").is_empty());
    assert!(parse(".png").is_empty());
}

#[test]
fn test_parse_is_idempotent_on_search_term() {
    for raw in ["uk: artist: Coldplay .png", "tv: Severance", "director: Michael Mann"] {
        let first = parse(raw);
        let second = parse(&first.search_term);
        assert_eq!(second.search_term, first.search_term);
        assert_eq!(second.media_kind, MediaKind::Album);
        assert_eq!(second.attribute, Attribute::None);
        assert_eq!(second.country, "us");
        assert_eq!(second.output_format, OutputFormat::Jpg);
    }
}

#[test]
fn test_png_inside_word_is_stripped() {
    // Known quirk: the format token is removed even mid-word
    let query = parse("screenshot.pngs");
    assert_eq!(query.output_format, OutputFormat::Png);
    assert_eq!(query.search_term, "screenshots");
}
