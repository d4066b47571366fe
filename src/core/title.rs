//! Display titles for catalog results.

use chrono::{DateTime, Datelike};

use crate::domain::{CatalogResult, MediaKind};

/// Release-type markers moved from the collection name into a bracketed tag
const RELEASE_MARKERS: &[&str] = &["EP", "Single"];

/// Build the title shown for a catalog result
pub fn display_title(result: &CatalogResult, kind: MediaKind) -> String {
    let artist = result.artist_name.as_deref().unwrap_or_default();
    let collection = result.collection_name.as_deref().unwrap_or_default();
    let track = result.track_name.as_deref().unwrap_or_default();
    let year = release_year(result);

    match kind {
        MediaKind::Album => {
            let mut title = join_names(artist, &normalize_release_marker(collection));
            if let Some(year) = year {
                title.push_str(&format!(" ({})", year));
            }
            title
        }
        MediaKind::Song | MediaKind::Ebook => join_names(artist, track),
        MediaKind::Movie => {
            let name = first_non_empty(&[track, collection]);
            match year {
                Some(year) => format!("{} ({})", name, year),
                None => name.to_string(),
            }
        }
        MediaKind::TvSeason => first_non_empty(&[collection, track, artist]).to_string(),
        MediaKind::Software => first_non_empty(&[track, collection, artist]).to_string(),
        MediaKind::Audiobook => join_names(artist, first_non_empty(&[collection, track])),
    }
}

/// Year from the record's release date
pub fn release_year(result: &CatalogResult) -> Option<i32> {
    let date = result.release_date.as_deref()?.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.year());
    }
    date.get(..4)
        .filter(|y| y.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|y| y.parse().ok())
}

/// Replace an inline `EP`/`Single` word with a trailing bracketed tag
///
/// `Viva la Vida - EP` becomes `Viva la Vida [EP]`.
pub fn normalize_release_marker(collection: &str) -> String {
    let mut words: Vec<&str> = collection.split_whitespace().collect();

    // Only the last marker word tags the release; earlier ones belong to the title
    let found = words.iter().enumerate().rev().find_map(|(i, word)| {
        let bare = word.trim_matches(|c: char| !c.is_alphanumeric());
        RELEASE_MARKERS
            .iter()
            .find(|m| **m == bare)
            .map(|marker| (i, *marker))
    });

    let Some((index, marker)) = found else {
        return collection.to_string();
    };

    words.remove(index);
    if index > 0 && is_separator(words[index - 1]) {
        words.remove(index - 1);
    }

    if words.is_empty() {
        return format!("[{}]", marker);
    }
    format!("{} [{}]", words.join(" "), marker)
}

fn is_separator(word: &str) -> bool {
    matches!(word, "-" | "–" | "—" | ":" | "/")
}

fn join_names(artist: &str, name: &str) -> String {
    match (artist.is_empty(), name.is_empty()) {
        (false, false) => format!("{} - {}", artist, name),
        (false, true) => artist.to_string(),
        _ => name.to_string(),
    }
}

fn first_non_empty<'a>(names: &[&'a str]) -> &'a str {
    names.iter().copied().find(|n| !n.is_empty()).unwrap_or_default()
}
