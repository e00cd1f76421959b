//! Light / dark / system theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the browser side of `state::theme`: a one-shot mount effect reads the
//! stored and OS preferences, and a second effect re-applies the store and
//! `<html>` marker whenever the shared `RwSignal<ThemeState>` changes. Effects
//! never run during SSR, so the server always renders the placeholder.

use leptos::prelude::*;

use crate::state::theme::{ResolvedTheme, ThemeMode, ThemeState};
use crate::util::theme::BrowserThemeEnv;

/// Round toggle button cycling System → Light → Dark.
///
/// Renders a neutral placeholder until the stored preference has been read,
/// so a possibly wrong theme is never shown.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    // Mount: tracks nothing, so it runs exactly once after hydration.
    Effect::new(move || {
        theme.update(|t| {
            if t.initialize(&BrowserThemeEnv) {
                #[cfg(feature = "hydrate")]
                log::debug!("theme initialized: mode={:?} resolved={:?}", t.mode(), t.resolved());
            }
        });
    });

    // State changed: keep store and root marker in line with the signal.
    Effect::new(move || {
        let current = theme.get();
        if !current.is_ready() {
            return;
        }
        let mut next = current;
        let mut env = BrowserThemeEnv;
        if next.apply_effects(&mut env) {
            theme.set(next);
        }
    });

    let on_toggle = move |_| {
        theme.update(ThemeState::toggle);
        #[cfg(feature = "hydrate")]
        log::debug!("theme mode -> {:?}", theme.get_untracked().mode());
    };

    let is_dark = move || theme.get().resolved() == ResolvedTheme::Dark;
    let follows_system = move || theme.get().mode() == ThemeMode::System;
    let label = move || theme.get().display_label();

    view! {
        <Show
            when=move || theme.get().is_ready()
            fallback=|| view! { <div class="theme-toggle theme-toggle--placeholder" aria-hidden="true"></div> }
        >
            <button
                class="theme-toggle"
                class:theme-toggle--dark=is_dark
                on:click=on_toggle
                aria-label="Toggle dark mode"
                title=label
            >
                <span class="theme-toggle__icons">
                    <span class="theme-toggle__icon theme-toggle__icon--sun" class:theme-toggle__icon--active=move || !is_dark()>
                        "☀"
                    </span>
                    <span class="theme-toggle__icon theme-toggle__icon--moon" class:theme-toggle__icon--active=is_dark>
                        "☾"
                    </span>
                    <Show when=follows_system>
                        <span class="theme-toggle__system-dot" aria-hidden="true"></span>
                    </Show>
                </span>
                <span class="theme-toggle__tooltip" role="tooltip">{label}</span>
            </button>
        </Show>
    }
}
