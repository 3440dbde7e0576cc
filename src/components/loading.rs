//! Spinner shown while a fetch is in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading">
            <div class="loading__spinner" aria-hidden="true"></div>
            <p class="loading__label">{label}</p>
        </div>
    }
}
