//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making JSON requests.
//! Errors are returned as plain strings; callers decide what the user sees.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::{API_BASE_OVERRIDE, BACKEND_PORT};

/// Get the base URL for API requests
///
/// # Returns
/// - `API_BASE_URL` from build time, without a trailing slash, if set
/// - otherwise protocol and hostname of the current page on [`BACKEND_PORT`],
///   e.g. "http://localhost:3000"
/// - empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path that starts with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL of a single resource, with the identifier percent-encoded
pub fn resource_url(collection: &str, id: &str) -> String {
    api_url(&resource_path(collection, id))
}

fn resource_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, urlencoding::encode(id))
}

/// GET a JSON document
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("GET {} failed: HTTP {}", url, response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// PUT a JSON body; any 2xx counts as success and the response body is ignored
pub async fn put_json<B: Serialize>(url: &str, body: &B) -> Result<(), String> {
    let response = Request::put(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("PUT {} failed: HTTP {}", url, response.status()));
    }

    Ok(())
}
