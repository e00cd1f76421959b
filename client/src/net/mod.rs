//! Networking modules for the notes backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls against the backend's `notes` collection and
//! `types` defines the record schema it exchanges.

pub mod api;
pub mod types;
