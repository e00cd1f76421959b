//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::theme_toggle::ThemeToggle;
use crate::pages::{note_detail::NoteDetailPage, notes::NotesPage};
use crate::state::theme::ThemeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared theme state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    provide_context(theme);

    view! {
        <Stylesheet id="leptos" href="/pkg/notepad.css"/>
        <Title text="Notes"/>

        <Router>
            <header class="app-header">
                <a class="app-header__title" href="/notes">"Notes"</a>
                <span class="app-header__spacer"></span>
                <ThemeToggle/>
            </header>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=NotesPage/>
                    <Route path=StaticSegment("notes") view=NotesPage/>
                    <Route path=(StaticSegment("notes"), ParamSegment("id")) view=NoteDetailPage/>
                </Routes>
            </main>
        </Router>
    }
}
