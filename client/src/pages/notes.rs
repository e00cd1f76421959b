//! Notes page: the newest notes as cards, followed by the create form.

use leptos::prelude::*;

use crate::components::create_note_form::CreateNoteForm;
use crate::components::note_card::NoteCard;
use crate::net::types::Note;
use crate::state::notes::NotesState;

#[component]
pub fn NotesPage() -> impl IntoView {
    let notes = RwSignal::new(NotesState::default());

    // Initial load; tracks nothing so it runs once after hydration.
    Effect::new(move || load_notes(notes));

    let on_settled = Callback::new(move |()| load_notes(notes));

    view! {
        <div class="notes-page">
            <Show when=move || notes.get().error.is_some()>
                <p class="notes-page__error">{move || notes.get().error.unwrap_or_default()}</p>
            </Show>
            <div class="notes-page__grid">
                <For
                    each=move || notes.get().items
                    key=|note| note.id.clone()
                    children=move |note: Note| view! { <NoteCard note=note/> }
                />
                <Show when=move || notes.get().is_empty()>
                    <p class="notes-page__empty">"No notes"</p>
                </Show>
            </div>
            <CreateNoteForm on_settled=on_settled/>
        </div>
    }
}

fn load_notes(notes: RwSignal<NotesState>) {
    let mut seq = 0;
    notes.update(|s| seq = s.begin_load());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::list_notes().await.map_err(|e| {
            leptos::logging::warn!("list notes failed: {e}");
            e.to_string()
        });
        notes.update(|s| {
            if !s.finish_load(seq, result) {
                log::debug!("dropped superseded notes response #{seq}");
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}
