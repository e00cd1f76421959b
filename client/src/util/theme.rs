//! Browser-backed theme environment.
//!
//! Reads and writes the theme key in `localStorage`, samples the
//! `(prefers-color-scheme: dark)` media query, and toggles the `dark` class on
//! the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Every browser call is best-effort: a missing window, blocked storage, or a
//! failed media query collapses to "nothing stored" / "prefers light". SSR
//! paths no-op so server rendering stays deterministic and always emits the
//! neutral placeholder.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::{ColorSchemeQuery, PreferenceStore, RootMarker};
#[cfg(feature = "hydrate")]
use crate::state::theme::{DARK_CLASS, STORAGE_KEY};

#[cfg(feature = "hydrate")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `web-sys` implementation of the theme collaborators.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeEnv;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for BrowserThemeEnv {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&mut self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(STORAGE_KEY, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }

    fn remove(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

impl ColorSchemeQuery for BrowserThemeEnv {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

impl RootMarker for BrowserThemeEnv {
    fn set_dark(&mut self, enabled: bool) {
        #[cfg(feature = "hydrate")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let classes = root.class_list();
            // Re-adding or re-removing is a no-op on a DOMTokenList.
            let _ = if enabled { classes.add_1(DARK_CLASS) } else { classes.remove_1(DARK_CLASS) };
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = enabled;
        }
    }
}
