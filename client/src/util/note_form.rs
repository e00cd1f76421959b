//! Client-side validation for the create-note form.
//!
//! Lengths are counted in UTF-16 code units so limits agree with the browser's
//! own notion of string length (and `maxlength`).

#[cfg(test)]
#[path = "note_form_test.rs"]
mod note_form_test;

use crate::net::types::NewNote;

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 50;
pub const CONTENT_MIN_LEN: usize = 10;
pub const CONTENT_MAX_LEN: usize = 500;

/// Per-field validation messages. `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteFormErrors {
    pub title: Option<&'static str>,
    pub content: Option<&'static str>,
}

impl NoteFormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validate a note title.
///
/// # Errors
///
/// Returns the user-facing message when the title is too short or too long.
pub fn validate_title(title: &str) -> Result<(), &'static str> {
    match text_len(title) {
        n if n < TITLE_MIN_LEN => Err("Title must be at least 3 characters"),
        n if n > TITLE_MAX_LEN => Err("Title can't exceed 50 characters"),
        _ => Ok(()),
    }
}

/// Validate note content.
///
/// # Errors
///
/// Returns the user-facing message when the content is too short or too long.
pub fn validate_content(content: &str) -> Result<(), &'static str> {
    match text_len(content) {
        n if n < CONTENT_MIN_LEN => Err("Content must be at least 10 characters"),
        n if n > CONTENT_MAX_LEN => Err("Content can't exceed 500 characters"),
        _ => Ok(()),
    }
}

/// Validate both fields and build the create payload.
///
/// # Errors
///
/// Returns every failing field's message at once.
pub fn validate_note_form(title: &str, content: &str) -> Result<NewNote, NoteFormErrors> {
    let errors = NoteFormErrors {
        title: validate_title(title).err(),
        content: validate_content(content).err(),
    };
    if errors.is_empty() {
        Ok(NewNote { title: title.to_owned(), content: content.to_owned() })
    } else {
        Err(errors)
    }
}
