//! MIME type lookup by file extension
//!
//! Catalog assets carry no MIME metadata, so the extension is the only
//! source of truth when resolving them from disk.

use std::path::Path;

/// Map a file extension to an image MIME type.
///
/// Returns `None` for extensions we do not serve as catalog assets.
pub fn from_extension(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?;
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
