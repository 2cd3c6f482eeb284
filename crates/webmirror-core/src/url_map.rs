//! URL to local relative path mapping.
//!
//! The mirrored tree reuses the site's URL paths: a resource lands at its
//! URL path component with a single leading separator stripped, or at
//! `index.html` when the path is empty.

use std::path::PathBuf;
use url::Url;

/// Filename used when the URL path is empty (e.g. `https://example.com`).
pub const INDEX_FILENAME: &str = "index.html";

/// Maps a URL onto the relative path its content is saved under.
///
/// The path component keeps its percent-encoding and internal structure;
/// exactly one leading `/` is stripped. Query and fragment never participate,
/// so URLs differing only there map to the same path (last write wins).
pub fn local_path_for_url(url: &Url) -> PathBuf {
    let path = url.path();
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        PathBuf::from(INDEX_FILENAME)
    } else {
        PathBuf::from(trimmed)
    }
}
