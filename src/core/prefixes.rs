//! Ordered prefix tables for query parsing.
//!
//! Tables are scanned front to back and the first matching token wins.
//! Tokens include their trailing colon and are compared case-insensitively.

use crate::domain::{Attribute, MediaKind};

/// Country prefixes mapped to storefront codes
///
/// `tv` is deliberately absent: it is the TV-season media prefix.
pub const COUNTRY_PREFIXES: &[(&str, &str)] = &[
    ("us:", "us"),
    ("uk:", "gb"),
    ("gb:", "gb"),
    ("ca:", "ca"),
    ("au:", "au"),
    ("nz:", "nz"),
    ("ie:", "ie"),
    ("jp:", "jp"),
    ("kr:", "kr"),
    ("cn:", "cn"),
    ("hk:", "hk"),
    ("tw:", "tw"),
    ("sg:", "sg"),
    ("my:", "my"),
    ("th:", "th"),
    ("vn:", "vn"),
    ("ph:", "ph"),
    ("id:", "id"),
    ("in:", "in"),
    ("pk:", "pk"),
    ("lk:", "lk"),
    ("np:", "np"),
    ("de:", "de"),
    ("at:", "at"),
    ("ch:", "ch"),
    ("fr:", "fr"),
    ("be:", "be"),
    ("nl:", "nl"),
    ("lu:", "lu"),
    ("it:", "it"),
    ("es:", "es"),
    ("pt:", "pt"),
    ("se:", "se"),
    ("no:", "no"),
    ("dk:", "dk"),
    ("fi:", "fi"),
    ("is:", "is"),
    ("pl:", "pl"),
    ("cz:", "cz"),
    ("sk:", "sk"),
    ("hu:", "hu"),
    ("ro:", "ro"),
    ("bg:", "bg"),
    ("gr:", "gr"),
    ("hr:", "hr"),
    ("si:", "si"),
    ("ee:", "ee"),
    ("lv:", "lv"),
    ("lt:", "lt"),
    ("ua:", "ua"),
    ("ru:", "ru"),
    ("tr:", "tr"),
    ("il:", "il"),
    ("ae:", "ae"),
    ("sa:", "sa"),
    ("qa:", "qa"),
    ("kw:", "kw"),
    ("bh:", "bh"),
    ("om:", "om"),
    ("jo:", "jo"),
    ("lb:", "lb"),
    ("eg:", "eg"),
    ("za:", "za"),
    ("ng:", "ng"),
    ("ke:", "ke"),
    ("mx:", "mx"),
    ("br:", "br"),
    ("ar:", "ar"),
    ("cl:", "cl"),
    ("co:", "co"),
    ("pe:", "pe"),
    ("ve:", "ve"),
    ("ec:", "ec"),
    ("uy:", "uy"),
    ("py:", "py"),
    ("bo:", "bo"),
    ("cr:", "cr"),
    ("pa:", "pa"),
    ("gt:", "gt"),
    ("do:", "do"),
    ("jm:", "jm"),
];

/// Media-kind prefixes
pub const MEDIA_PREFIXES: &[(&str, MediaKind)] = &[
    ("album:", MediaKind::Album),
    ("song:", MediaKind::Song),
    ("audiobook:", MediaKind::Audiobook),
    ("ebook:", MediaKind::Ebook),
    ("movie:", MediaKind::Movie),
    ("tv:", MediaKind::TvSeason),
    ("app:", MediaKind::Software),
];

/// Attribute prefixes with the media kind they imply
pub const ATTRIBUTE_PREFIXES: &[(&str, Attribute, MediaKind)] = &[
    ("artist:", Attribute::ArtistTerm, MediaKind::Album),
    ("title:", Attribute::TitleTerm, MediaKind::Album),
    ("author:", Attribute::AuthorTerm, MediaKind::Audiobook),
    ("director:", Attribute::DirectorTerm, MediaKind::Movie),
    ("actor:", Attribute::ActorTerm, MediaKind::Movie),
    ("composer:", Attribute::ComposerTerm, MediaKind::Album),
];

/// Strip `token` from the start of `term` (case-insensitive) along with any
/// whitespace following it
pub fn strip_token<'a>(term: &'a str, token: &str) -> Option<&'a str> {
    let head = term.get(..token.len())?;
    if head.eq_ignore_ascii_case(token) {
        Some(term[token.len()..].trim_start())
    } else {
        None
    }
}

/// Match the first table entry whose token starts `term`
pub fn match_prefix<'a, 't, T>(
    term: &'a str,
    table: &'t [T],
    token: impl Fn(&'t T) -> &'t str,
) -> Option<(&'t T, &'a str)> {
    table
        .iter()
        .find_map(|entry| strip_token(term, token(entry)).map(|rest| (entry, rest)))
}
