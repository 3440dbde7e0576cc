//! Error banner with an optional retry action.

use leptos::prelude::*;

#[component]
pub fn ErrorDisplay(
    #[prop(into)] message: String,
    #[prop(optional, into)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <p class="error-banner__message">{message}</p>
            {on_retry.map(|retry| {
                view! {
                    <button class="btn error-banner__retry" on:click=move |_| retry.run(())>
                        "Try Again"
                    </button>
                }
            })}
        </div>
    }
}
