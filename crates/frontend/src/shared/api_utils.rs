//! API utilities for talking to the style transfer service.
//!
//! The service is reverse-proxied on the same origin as the app, so the base
//! URL is just the current window origin.

/// Get the base URL for API requests
///
/// # Returns
/// - Base URL like "http://localhost:8080" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("/health");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
