//! Create-note form state: field drafts, validation errors, submit status.
//!
//! DESIGN
//! ======
//! The form component only moves values in and out of this struct; whether a
//! submit may start and what the user sees afterwards is decided here.

#[cfg(test)]
#[path = "create_note_test.rs"]
mod create_note_test;

use crate::net::types::NewNote;
use crate::util::note_form::{NoteFormErrors, validate_note_form};

/// Shown when the backend failure carries no message of its own.
pub const SUBMIT_FALLBACK_ERROR: &str = "Failed to create note. Please try again.";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Note created successfully!";
/// How long the success banner stays up.
pub const SUCCESS_BANNER_MS: u32 = 3_000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateNoteState {
    pub title: String,
    pub content: String,
    pub errors: NoteFormErrors,
    pub submitting: bool,
    pub submit_error: Option<String>,
    pub success: bool,
}

impl CreateNoteState {
    /// Validate the drafts and, if they pass, enter the submitting state.
    ///
    /// Returns the payload to send, or `None` when a submit is already in
    /// flight or validation failed (field errors are recorded).
    pub fn begin_submit(&mut self) -> Option<NewNote> {
        if self.submitting {
            return None;
        }
        match validate_note_form(&self.title, &self.content) {
            Ok(note) => {
                self.errors = NoteFormErrors::default();
                self.submitting = true;
                self.submit_error = None;
                self.success = false;
                Some(note)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Record the backend outcome. Success clears the form.
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.title.clear();
                self.content.clear();
                self.errors = NoteFormErrors::default();
                self.success = true;
            }
            Err(message) => {
                let message = message.trim();
                self.submit_error = Some(if message.is_empty() {
                    SUBMIT_FALLBACK_ERROR.to_owned()
                } else {
                    message.to_owned()
                });
            }
        }
    }

    pub fn dismiss_success(&mut self) {
        self.success = false;
    }
}
