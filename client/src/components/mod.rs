//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the note form while reading/writing
//! shared state from Leptos context providers.

pub mod create_note_form;
pub mod note_card;
pub mod spinner;
pub mod theme_toggle;
