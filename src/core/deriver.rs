//! Artwork URL derivation.
//!
//! Every link is a rewrite of the catalog thumbnail URL; no image is fetched.
//! Which sizes are offered depends on the media kind:
//!
//! | kind | links |
//! |---|---|
//! | album, song | 600, 1500, 3000, max |
//! | audiobook | 3000, max |
//! | ebook | 1467x2200, max |
//! | software | max |
//! | movie, tvSeason | max (poster path) |

use crate::domain::{ArtworkLink, ArtworkLinkSet, CatalogResult, MediaKind, OutputFormat};
use crate::domain::artwork::MAX_LABEL;

use super::artwork_url::{ArtworkUrl, Size};

/// Square target sizes offered for music artwork
pub const MUSIC_SIZES: &[u32] = &[600, 1500, 3000];

/// Square target sizes offered for audiobook covers
pub const AUDIOBOOK_SIZES: &[u32] = &[3000];

/// Portrait ebook cover size
pub const EBOOK_SIZE: Size = Size::new(1467, 2200);

/// Size token every catalog thumbnail is served at
pub const THUMBNAIL_SIZE: Size = Size::square(100);

/// Target large enough that the CDN falls back to the biggest stored image
pub const OVERSIZED: u32 = 100_000;

/// Poster target for movies and TV seasons
pub const POSTER_MAX_SIZE: Size = Size::square(10_000);

/// Host prefix of the CDN's flat high-resolution mirror
pub const HIGH_RES_PREFIX: &str = "https://a1.mzstatic.com/r40/";

/// Size used for inline previews
pub const PREVIEW_SIZE: u32 = 600;

/// Rewrite a thumbnail URL to a square `size`, always as `.jpg` or `.png`
pub fn resize(template: &str, size: u32, format: OutputFormat) -> String {
    resized(template, size, format).to_string()
}

fn resized(template: &str, size: u32, format: OutputFormat) -> ArtworkUrl {
    let mut url = ArtworkUrl::parse(template);
    url.set_size(Size::square(size))
        .force_jpeg()
        .apply_format(format == OutputFormat::Png);
    url
}

/// Largest image the CDN still has, served from the high-resolution mirror
pub fn max_resolution_url(template: &str, format: OutputFormat) -> String {
    let mut url = resized(template, OVERSIZED, format);
    url.rehost(HIGH_RES_PREFIX).strip_marker();
    url.to_string()
}

/// Largest poster for movies and TV seasons
///
/// Stays on the thumbnail host and keeps a non-jpeg extension if present.
pub fn poster_max_url(template: &str, format: OutputFormat) -> String {
    let mut url = ArtworkUrl::parse(template);
    url.substitute_size(THUMBNAIL_SIZE, POSTER_MAX_SIZE)
        .ensure_extension()
        .apply_format(format == OutputFormat::Png);
    url.to_string()
}

/// Portrait ebook cover
pub fn ebook_cover_url(template: &str, format: OutputFormat) -> String {
    let mut url = ArtworkUrl::parse(template);
    url.substitute_size(THUMBNAIL_SIZE, EBOOK_SIZE)
        .force_jpeg()
        .apply_format(format == OutputFormat::Png);
    url.to_string()
}

/// Derive the ordered download links for one catalog record
///
/// Records without a thumbnail yield an empty set.
pub fn derive_links(result: &CatalogResult, kind: MediaKind, format: OutputFormat) -> ArtworkLinkSet {
    match result.thumbnail_url() {
        Some(template) => derive_from_template(template, kind, format),
        None => ArtworkLinkSet {
            links: Vec::new(),
            preview: String::new(),
        },
    }
}

/// Derive the ordered download links from a raw thumbnail URL
pub fn derive_from_template(template: &str, kind: MediaKind, format: OutputFormat) -> ArtworkLinkSet {
    let square = |sizes: &[u32]| -> Vec<ArtworkLink> {
        sizes
            .iter()
            .map(|&size| ArtworkLink::new(Size::square(size).to_string(), resize(template, size, format)))
            .collect()
    };

    let mut links = match kind {
        MediaKind::Album | MediaKind::Song => square(MUSIC_SIZES),
        MediaKind::Audiobook => square(AUDIOBOOK_SIZES),
        MediaKind::Ebook => vec![ArtworkLink::new(
            EBOOK_SIZE.to_string(),
            ebook_cover_url(template, format),
        )],
        MediaKind::Movie | MediaKind::TvSeason | MediaKind::Software => Vec::new(),
    };

    let max = match kind {
        MediaKind::Movie | MediaKind::TvSeason => poster_max_url(template, format),
        _ => max_resolution_url(template, format),
    };
    links.push(ArtworkLink::new(MAX_LABEL, max));

    ArtworkLinkSet {
        links,
        preview: resize(template, PREVIEW_SIZE, OutputFormat::Jpg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THUMB: &str =
        "https://is1-ssl.mzstatic.com/image/thumb/Music125/v4/aa/bb/cc/uuid/cover.jpg/100x100bb.jpg";

    #[test]
    fn test_resize() {
        assert_eq!(
            resize(THUMB, 600, OutputFormat::Jpg),
            "https://is1-ssl.mzstatic.com/image/thumb/Music125/v4/aa/bb/cc/uuid/cover.jpg/600x600bb.jpg"
        );
        assert!(resize(THUMB, 3000, OutputFormat::Png).ends_with("/3000x3000bb.png"));
    }

    #[test]
    fn test_resize_appends_extension() {
        assert_eq!(
            resize("https://example.com/a/100x100bb", 600, OutputFormat::Jpg),
            "https://example.com/a/600x600bb.jpg"
        );
    }

    #[test]
    fn test_resize_keeps_query_string() {
        assert_eq!(
            resize("https://example.com/a/100x100bb.jpg?v=1", 600, OutputFormat::Png),
            "https://example.com/a/600x600bb.png?v=1"
        );
    }

    #[test]
    fn test_max_resolution_url() {
        assert_eq!(
            max_resolution_url(THUMB, OutputFormat::Jpg),
            "https://a1.mzstatic.com/r40/Music125/v4/aa/bb/cc/uuid/cover.jpg/100000x100000.jpg"
        );
    }

    #[test]
    fn test_max_resolution_keeps_marker_like_path_segments() {
        // `bb` is a legitimate hash segment in the path and must survive
        let url = max_resolution_url(THUMB, OutputFormat::Png);
        assert!(url.contains("/aa/bb/cc/"));
        assert!(url.ends_with("/100000x100000.png"));
    }

    #[test]
    fn test_poster_max_url() {
        let thumb = "https://is1-ssl.mzstatic.com/image/thumb/Video/v4/aa/poster.jpg/100x100bb.jpg";
        assert_eq!(
            poster_max_url(thumb, OutputFormat::Jpg),
            "https://is1-ssl.mzstatic.com/image/thumb/Video/v4/aa/poster.jpg/10000x10000bb.jpg"
        );

        let webp = "https://is1-ssl.mzstatic.com/image/thumb/Video/v4/aa/100x100bb.webp";
        assert!(poster_max_url(webp, OutputFormat::Png).ends_with("10000x10000bb.webp"));
    }

    #[test]
    fn test_ebook_cover_url() {
        let thumb = "https://is1-ssl.mzstatic.com/image/thumb/Publication/v4/aa/100x100bb.jpg";
        assert!(ebook_cover_url(thumb, OutputFormat::Jpg).ends_with("/1467x2200bb.jpg"));
    }

    #[test]
    fn test_preview_is_always_jpeg() {
        let links = derive_from_template(THUMB, MediaKind::Album, OutputFormat::Png);
        assert!(links.preview.ends_with("/600x600bb.jpg"));
    }

    #[test]
    fn test_labels() {
        let links = derive_from_template(THUMB, MediaKind::Album, OutputFormat::Jpg);
        let labels: Vec<_> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["600x600", "1500x1500", "3000x3000", "Max"]);
    }

    #[test]
    fn test_record_without_thumbnail() {
        let links = derive_links(&CatalogResult::default(), MediaKind::Album, OutputFormat::Jpg);
        assert!(links.is_empty());
        assert_eq!(links.max_resolution(), None);
    }
}
