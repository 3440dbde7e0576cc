//! Authenticated shell: sidebar navigation around the routed page.

use leptos::prelude::*;

use crate::state::auth::SessionState;

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let username = move || {
        session
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    view! {
        <div class="layout">
            <aside class="layout__sidebar">
                <span class="layout__brand">"Venti"</span>
                <nav class="layout__nav">
                    <a class="layout__link" href="/dashboard">
                        "Dashboard"
                    </a>
                    <a class="layout__link" href="/clubs">
                        "Clubs"
                    </a>
                    <a class="layout__link" href="/events">
                        "Events"
                    </a>
                    <a class="layout__link" href="/chat">
                        "Chat"
                    </a>
                </nav>
                <div class="layout__footer">
                    <span class="layout__user">{username}</span>
                    <button
                        class="btn layout__logout"
                        on:click=move |_| crate::state::auth::logout(session)
                    >
                        "Logout"
                    </button>
                </div>
            </aside>
            <main class="layout__content">{children()}</main>
        </div>
    }
}
