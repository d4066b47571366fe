//! Artwork CDN URL value type.
//!
//! Thumbnail URLs from the catalog look like
//!
//! ```text
//! https://is1-ssl.mzstatic.com/image/thumb/Music125/v4/aa/bb/cc/<uuid>/cover.jpg/100x100bb.jpg
//! ```
//!
//! where the final segment holds the size token (`100x100`), the resolution
//! marker (`bb`) and the extension (`jpg`).
//!
//! The CDN serves a differently sized image when the size token in the file
//! name changes. `ArtworkUrl` splits the final path segment into its parts so
//! each rewrite touches exactly one of them. Nothing is validated: a URL
//! without a size token still round-trips and size rewrites become no-ops.

use std::fmt;

/// Resolution marker asking the CDN to fit the image inside the box
pub const SIZE_MARKER: &str = "bb";

/// Extensions the CDN recognizes as image formats
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "tif", "tiff", "heic"];

/// Path component that precedes the asset path on thumbnail hosts
const THUMB_PATH: &str = "/image/thumb/";

/// Pixel dimensions of a size token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(size: u32) -> Self {
        Self::new(size, size)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Decomposed artwork URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkUrl {
    /// Everything up to and including the last `/`
    dir: String,
    /// File name text before the size token
    stem: String,
    size: Option<Size>,
    /// Letters directly after the size token (e.g. `bb`)
    marker: String,
    /// File name text between the marker and the extension
    tail: String,
    /// Recognized image extension, without the dot
    extension: Option<String>,
    /// Query string and fragment, including the leading `?` or `#`
    suffix: String,
}

impl ArtworkUrl {
    /// Split a URL into its rewritable parts
    pub fn parse(url: &str) -> Self {
        let (url, suffix) = url.split_at(url.find(['?', '#']).unwrap_or(url.len()));
        let split = url.rfind('/').map_or(0, |i| i + 1);
        let (dir, file) = url.split_at(split);

        let (name, extension) = match file.rsplit_once('.') {
            Some((name, ext)) if is_image_extension(ext) => (name, Some(ext.to_string())),
            _ => (file, None),
        };

        match find_size_token(name) {
            Some((start, end, size)) => {
                let rest = &name[end..];
                let marker_len = rest
                    .find(|c: char| !c.is_ascii_alphabetic())
                    .unwrap_or(rest.len());
                Self {
                    dir: dir.to_string(),
                    stem: name[..start].to_string(),
                    size: Some(size),
                    marker: rest[..marker_len].to_string(),
                    tail: rest[marker_len..].to_string(),
                    extension,
                    suffix: suffix.to_string(),
                }
            }
            None => Self {
                dir: dir.to_string(),
                stem: name.to_string(),
                size: None,
                marker: String::new(),
                tail: String::new(),
                extension,
                suffix: suffix.to_string(),
            },
        }
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Replace the size token, followed by the resolution marker
    ///
    /// No-op when the URL has no size token.
    pub fn set_size(&mut self, size: Size) -> &mut Self {
        if self.size.is_some() {
            self.size = Some(size);
            self.marker = SIZE_MARKER.to_string();
        }
        self
    }

    /// Replace the size token only when it currently equals `from`
    pub fn substitute_size(&mut self, from: Size, to: Size) -> &mut Self {
        if self.size == Some(from) {
            self.set_size(to);
        }
        self
    }

    /// Drop the marker after the size token
    pub fn strip_marker(&mut self) -> &mut Self {
        self.marker.clear();
        self
    }

    /// Use `.jpg`, replacing any recognized image extension
    pub fn force_jpeg(&mut self) -> &mut Self {
        self.extension = Some("jpg".to_string());
        self
    }

    /// Use `.jpg` unless a non-jpeg image extension is already present
    pub fn ensure_extension(&mut self) -> &mut Self {
        let keep = self
            .extension
            .as_deref()
            .is_some_and(|ext| !is_jpeg(ext));
        if !keep {
            self.extension = Some("jpg".to_string());
        }
        self
    }

    /// Swap a trailing `.jpg` for `.png` when PNG output is requested
    pub fn apply_format(&mut self, png: bool) -> &mut Self {
        if png && self.extension.as_deref().is_some_and(is_jpeg) {
            self.extension = Some("png".to_string());
        }
        self
    }

    /// Re-root the asset path that follows `/image/thumb/` under `prefix`
    ///
    /// URLs not served from a thumbnail path are left untouched.
    pub fn rehost(&mut self, prefix: &str) -> &mut Self {
        if let Some(pos) = self.dir.find(THUMB_PATH) {
            let asset_path = &self.dir[pos + THUMB_PATH.len()..];
            self.dir = format!("{}{}", prefix, asset_path);
        }
        self
    }
}

impl fmt::Display for ArtworkUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.dir, self.stem)?;
        if let Some(size) = self.size {
            write!(f, "{}", size)?;
        }
        write!(f, "{}{}", self.marker, self.tail)?;
        if let Some(ext) = &self.extension {
            write!(f, ".{}", ext)?;
        }
        f.write_str(&self.suffix)
    }
}

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

fn is_jpeg(ext: &str) -> bool {
    ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg")
}

/// Locate the first `{digits}x{digits}` run in a file name
///
/// Returns the byte range of the token and its parsed dimensions.
fn find_size_token(name: &str) -> Option<(usize, usize, Size)> {
    let bytes = name.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let width_end = i;

        if i < bytes.len() && bytes[i] == b'x' {
            let height_start = i + 1;
            let mut j = height_start;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > height_start {
                let width = name[start..width_end].parse().ok();
                let height = name[height_start..j].parse().ok();
                if let (Some(width), Some(height)) = (width, height) {
                    return Some((start, j, Size::new(width, height)));
                }
            }
        }
    }

    None
}
