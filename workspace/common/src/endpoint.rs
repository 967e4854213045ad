use crate::collection::Collection;

/// Backend address used when nothing overrides it.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

pub const SUMMARY_PATH: &str = "/api/summary";

/// Trims whitespace and trailing slashes so paths can be appended directly.
/// An empty value falls back to [`DEFAULT_BACKEND_URL`].
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BACKEND_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Path for listing and creating records of `collection`.
pub fn collection_path(collection: Collection) -> String {
    format!("/api/{}", collection)
}
