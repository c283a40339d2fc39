//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use once_cell::sync::OnceCell;

static API_BASE: OnceCell<String> = OnceCell::new();

/// Set the base URL for API requests once at startup.
///
/// Later calls are ignored; the first configured value wins.
pub fn init_api_base(base: &str) {
    let base = base.trim_end_matches('/').to_string();
    if API_BASE.set(base).is_err() {
        log::warn!("API base already initialised, ignoring new value");
    }
}

/// Get the base URL for API requests
///
/// # Returns
/// - Configured base like "https://shop.example"
/// - Empty string (same origin) if not configured
pub fn api_base() -> &'static str {
    API_BASE.get().map(String::as_str).unwrap_or("")
}

/// Join a base and an API path
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/excel-cleanup/download");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(api_base(), path)
}

/// Percent-encode a single path segment (e.g. a filename)
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("", "/api/x"), "/api/x");
        assert_eq!(join_url("https://shop.example/", "/api/x"), "https://shop.example/api/x");
    }

    #[test]
    fn test_path_segment_encodes_spaces_and_slashes() {
        assert_eq!(path_segment("Blue Hour #2.jpg"), "Blue%20Hour%20%232.jpg");
        assert_eq!(path_segment("a/b.png"), "a%2Fb.png");
    }
}
