//! Card component for a note on the list page.

use leptos::prelude::*;

use crate::net::types::Note;

/// A sticky-note style card linking to the note's detail page.
#[component]
pub fn NoteCard(note: Note) -> impl IntoView {
    let href = format!("/notes/{}", note.id);

    view! {
        <div class="note note--yellow">
            <a class="note__link" href=href>
                <h1 class="note__title">{note.title}</h1>
                <p class="note__content">{note.content}</p>
            </a>
        </div>
    }
}
