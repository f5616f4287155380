//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the backend listens on (see `[server] port` in config.toml)
pub const BACKEND_PORT: &str = "3000";

/// Get the base URL for API requests
///
/// When the page is served by the backend itself the API is same-origin and
/// the base is empty. Otherwise (e.g. `trunk serve` on another port) requests
/// go to the backend port on the current host.
///
/// # Returns
/// - `""` when already on the backend port
/// - API base URL like "http://localhost:3000" otherwise
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = location.port().unwrap_or_default();
    api_base_for(&protocol, &hostname, &port)
}

/// Pure part of [`api_base`]
pub fn api_base_for(protocol: &str, hostname: &str, port: &str) -> String {
    if port == BACKEND_PORT {
        String::new()
    } else {
        format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
    }
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
