//! Create-note form with inline validation and submit feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered below the note list. Validation and submit bookkeeping live in
//! `state::create_note`; this component wires inputs and the network call.

use leptos::prelude::*;

use crate::components::spinner::Spinner;
use crate::state::create_note::{CreateNoteState, SUBMIT_SUCCESS_MESSAGE};
#[cfg(feature = "hydrate")]
use crate::state::create_note::SUCCESS_BANNER_MS;

/// Note creation form. `on_settled` runs after every submit attempt that
/// reached the backend, so the caller can refresh its list.
#[component]
pub fn CreateNoteForm(#[prop(into)] on_settled: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(CreateNoteState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut payload = None;
        form.update(|f| payload = f.begin_submit());
        let Some(note) = payload else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_note(&note).await;
            let created = result.is_ok();
            let result = result.map(|_| ()).map_err(|e| {
                leptos::logging::warn!("create note failed: {e}");
                e.to_string()
            });
            form.update(|f| f.finish_submit(result));
            on_settled.run(());
            if created {
                gloo_timers::future::TimeoutFuture::new(SUCCESS_BANNER_MS).await;
                form.update(CreateNoteState::dismiss_success);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (note, on_settled);
    };

    let submitting = move || form.get().submitting;
    let title_error = move || form.get().errors.title;
    let content_error = move || form.get().errors.content;

    view! {
        <div class="note-form">
            <h2 class="note-form__heading">"Create New Note"</h2>

            <Show when=move || form.get().success>
                <div class="note-form__banner note-form__banner--success">{SUBMIT_SUCCESS_MESSAGE}</div>
            </Show>
            <Show when=move || form.get().submit_error.is_some()>
                <div class="note-form__banner note-form__banner--error">
                    {move || form.get().submit_error.unwrap_or_default()}
                </div>
            </Show>

            <form class="note-form__fields" on:submit=on_submit>
                <div class="note-form__field">
                    <label class="note-form__label" for="title">"Title"</label>
                    <input
                        id="title"
                        type="text"
                        class="note-form__input"
                        class:note-form__input--invalid=move || title_error().is_some()
                        prop:value=move || form.get().title
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        disabled=submitting
                    />
                    <Show when=move || title_error().is_some()>
                        <p class="note-form__error">{move || title_error().unwrap_or_default()}</p>
                    </Show>
                </div>

                <div class="note-form__field">
                    <label class="note-form__label" for="content">"Content"</label>
                    <textarea
                        id="content"
                        rows="4"
                        class="note-form__input"
                        class:note-form__input--invalid=move || content_error().is_some()
                        prop:value=move || form.get().content
                        on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
                        disabled=submitting
                    ></textarea>
                    <Show when=move || content_error().is_some()>
                        <p class="note-form__error">{move || content_error().unwrap_or_default()}</p>
                    </Show>
                </div>

                <button class="note-form__submit" type="submit" disabled=submitting>
                    <Show when=submitting fallback=|| "Create Note">
                        <span class="note-form__submitting">
                            <Spinner/>
                            "Creating..."
                        </span>
                    </Show>
                </button>
            </form>
        </div>
    }
}
