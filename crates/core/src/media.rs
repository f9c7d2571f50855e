//! Content-type handling for uploaded ad pictures.

/// Content type stored when an upload does not declare one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Maximum accepted picture size in bytes (2 MiB).
pub const MAX_PICTURE_BYTES: usize = 2 * 1024 * 1024;

/// Normalize the content type declared by a multipart upload.
///
/// Strips any `; charset=...` style parameters and falls back to
/// [`DEFAULT_CONTENT_TYPE`] when the declared value is absent or blank.
pub fn normalize_content_type(declared: Option<&str>) -> String {
    match declared {
        Some(raw) => {
            let essence = raw.split(';').next().unwrap_or(raw).trim();
            if essence.is_empty() {
                DEFAULT_CONTENT_TYPE.to_string()
            } else {
                essence.to_ascii_lowercase()
            }
        }
        None => DEFAULT_CONTENT_TYPE.to_string(),
    }
}
