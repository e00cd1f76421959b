//! Notes collection DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's record JSON so serde needs no renames
//! beyond the paging envelope's camelCase keys.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A stored note record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Backend-assigned record identifier.
    pub id: String,
    pub title: String,
    pub content: String,
    /// Creation timestamp as sent by the backend, e.g. `2024-05-01 10:20:30.123Z`.
    #[serde(default)]
    pub created: String,
}

impl Note {
    /// Date portion of `created` for display. Falls back to the raw value
    /// when it does not start with a `YYYY-MM-DD` date.
    #[must_use]
    pub fn created_date(&self) -> &str {
        let raw = self.created.trim();
        match raw.get(..10) {
            Some(date) if is_iso_date(date) => date,
            _ => raw,
        }
    }
}

fn is_iso_date(s: &str) -> bool {
    s.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Payload for creating a note.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

/// One page of a collection listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total_items: i64,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub items: Vec<Note>,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BackendError {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
}
