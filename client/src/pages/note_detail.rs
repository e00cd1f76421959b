//! Single-note page at `/notes/{id}`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::spinner::Spinner;
use crate::net::types::Note;

#[component]
pub fn NoteDetailPage() -> impl IntoView {
    let params = use_params_map();
    let note = RwSignal::new(None::<Result<Note, String>>);

    Effect::new(move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        note.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_note(&id).await.map_err(|e| {
                leptos::logging::warn!("fetch note {id} failed: {e}");
                e.to_string()
            });
            // Drop responses for a route we already left.
            if params.with_untracked(|p| p.get("id")).as_deref() == Some(id.as_str()) {
                note.set(Some(result));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="note-detail-page">
            <h1>"Note Details"</h1>
            {move || match note.get() {
                None => view! { <Spinner/> }.into_any(),
                Some(Err(message)) => view! { <p class="note-detail__error">{message}</p> }.into_any(),
                Some(Ok(note)) => view! { <NoteDetail note=note/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn NoteDetail(note: Note) -> impl IntoView {
    let created = format!("Created: {}", note.created_date());

    view! {
        <div class="note-detail">
            <div class="note-detail__header">
                <h2 class="note-detail__title">{note.title}</h2>
                <span class="note-detail__created">{created}</span>
            </div>
            <div class="note-detail__body">
                <p class="note-detail__content">{note.content}</p>
            </div>
            <div class="note-detail__footer">
                <span class="note-detail__id">{format!("ID: {}", note.id)}</span>
            </div>
        </div>
    }
}
