//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain state structs wrapped in `RwSignal`s and shared through Leptos
//! context. Transition logic lives on the structs so it is testable without a
//! reactive runtime.

pub mod create_note;
pub mod notes;
pub mod theme;
