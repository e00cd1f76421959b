//! REST helpers for the notes backend (collection `notes`).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! backend is only contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! page behavior without crashing hydration. Non-2xx responses carry the
//! backend's own `message` when it sends one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{NewNote, Note};
#[cfg(feature = "hydrate")]
use super::types::{BackendError, NotePage};

/// Backend used when `NOTES_BACKEND_URL` is not set at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8090";
pub const NOTES_COLLECTION: &str = "notes";
/// Notes shown on the list page, newest first.
pub const LIST_PAGE_SIZE: u32 = 30;
#[cfg(any(test, feature = "hydrate"))]
const NOTE_FIELDS: &str = "id,title,content,created";

/// Failures talking to the notes backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// No browser context (server-side render).
    #[error("backend not available on server")]
    Unavailable,
}

/// Base URL of the notes backend, without a trailing slash.
#[must_use]
pub fn backend_url() -> &'static str {
    normalize_base_url(option_env!("NOTES_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_BACKEND_URL } else { trimmed }
}

#[cfg(any(test, feature = "hydrate"))]
fn records_endpoint(base: &str) -> String {
    format!("{base}/api/collections/{NOTES_COLLECTION}/records")
}

#[cfg(any(test, feature = "hydrate"))]
fn list_endpoint(base: &str) -> String {
    format!("{}?page=1&perPage={LIST_PAGE_SIZE}&sort=-id", records_endpoint(base))
}

#[cfg(any(test, feature = "hydrate"))]
fn note_endpoint(base: &str, id: &str) -> String {
    // The id comes from the route; encode it so it stays one path segment.
    format!("{}/{}?fields={NOTE_FIELDS}", records_endpoint(base), urlencoding::encode(id))
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, backend_message: Option<&str>) -> ApiError {
    let message = match backend_message.map(str::trim) {
        Some(m) if !m.is_empty() => m.to_owned(),
        _ => format!("backend returned status {status}"),
    };
    ApiError::Status { status, message }
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let body = resp.json::<BackendError>().await.ok();
    status_error(resp.status(), body.as_ref().map(|b| b.message.as_str()))
}

/// Fetch the newest notes (first page, sorted by descending id).
///
/// # Errors
///
/// Returns an error if the request fails, the backend rejects it, or the
/// listing cannot be decoded.
pub async fn list_notes() -> Result<Vec<Note>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = list_endpoint(backend_url());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let page: NotePage = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(page.items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single note by id.
///
/// # Errors
///
/// Returns an error if the request fails, the note does not exist, or the
/// record cannot be decoded.
pub async fn fetch_note(id: &str) -> Result<Note, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = note_endpoint(backend_url(), id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Note>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Create a note and return the stored record.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the record.
pub async fn create_note(note: &NewNote) -> Result<Note, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = records_endpoint(backend_url());
        let resp = gloo_net::http::Request::post(&url)
            .json(note)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Note>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = note;
        Err(ApiError::Unavailable)
    }
}
