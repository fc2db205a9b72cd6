//! API utilities for frontend-backend communication
//!
//! The platform serves its API from the same origin as the front-end.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin of the current page, like "https://ctf.example.com"
/// - Empty string if window is not available (relative URLs are used then)
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/game/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
