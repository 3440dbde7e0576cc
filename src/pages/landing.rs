//! Public landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Signed-in visitors go straight to their dashboard.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.is_authenticated() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    view! {
        <div class="landing-page">
            <div class="landing-page__hero">
                <h1>"Venti"</h1>
                <p class="landing-page__tagline">
                    "Find your people. Join clubs, plan events, and chat in realtime."
                </p>
                <a class="btn btn--primary landing-page__cta" href="/login">
                    "Get Started"
                </a>
            </div>
        </div>
    }
}
