//! Small loading indicator.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label="Loading">
            <div class="spinner__ring"></div>
        </div>
    }
}
