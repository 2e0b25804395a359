//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Build a full API URL from a path
///
/// An empty `base` keeps the URL relative, so the request goes to the page's
/// own origin. A trailing slash on `base` is tolerated.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("http://localhost:8080", "/shopcarts/7");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Percent-encode a value typed into a form field for use as a path segment
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value.trim()).into_owned()
}
