//! Note list state for the notes page.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use crate::net::types::Note;

/// Notes shown on the list page plus load status.
///
/// `load_seq` numbers list requests; only the response to the newest one is
/// applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotesState {
    pub items: Vec<Note>,
    pub loading: bool,
    /// Set once any list request has completed, successfully or not.
    pub loaded: bool,
    pub error: Option<String>,
    pub load_seq: u64,
}

impl NotesState {
    /// Mark a reload in flight and return its sequence number. Existing items
    /// stay visible until it lands.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.loading = true;
        self.error = None;
        self.load_seq
    }

    /// Record the outcome of list request `seq`. Responses to superseded
    /// requests are dropped and `false` is returned. A failed reload keeps
    /// the previously loaded items.
    pub fn finish_load(&mut self, seq: u64, result: Result<Vec<Note>, String>) -> bool {
        if seq != self.load_seq {
            return false;
        }
        self.loading = false;
        self.loaded = true;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Whether to show the empty-list placeholder. Never true before the
    /// first response, so an unloaded page does not claim there are no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaded && !self.loading && self.items.is_empty()
    }
}
