//! API utilities for frontend-backend communication

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Port of `trunk serve` during development
pub const DEV_SERVER_PORT: &str = "8080";
/// Backend port the dev server talks to
pub const DEV_BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// The backend serves the built frontend itself, so API paths are
/// same-origin (empty base) whatever port it was configured with. Only a page
/// coming from the trunk dev server is pointed at the backend on
/// `DEV_BACKEND_PORT`.
/// Empty string if window is not available.
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
    base_for_location(&protocol, &hostname, &port)
}

/// API base for a page loaded from `protocol//hostname:port`
pub fn base_for_location(protocol: &str, hostname: &str, port: &str) -> String {
    if port == DEV_SERVER_PORT {
        format!("{}//{}:{}", protocol, hostname, DEV_BACKEND_PORT)
    } else {
        String::new()
    }
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET `url` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
