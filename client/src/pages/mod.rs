//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and delegates rendering details to
//! `components`.

pub mod note_detail;
pub mod notes;
