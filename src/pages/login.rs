//! Login page: username + password, plus the Google OAuth entry point.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::SessionState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate_dashboard = use_navigate();
    let query = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // A failed OAuth callback lands back here with an error marker.
    Effect::new(move || {
        if query.get().get("error").as_deref() == Some("social_auth_failed") {
            error.set("Social sign-in failed. Please try again.".to_owned());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if username_value.is_empty() || password_value.is_empty() {
            error.set("Enter both username and password.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate_dashboard = navigate_dashboard.clone();
            leptos::task::spawn_local(async move {
                match crate::state::auth::login(session, &username_value, &password_value).await {
                    Ok(()) => {
                        navigate_dashboard("/dashboard", NavigateOptions::default());
                    }
                    Err(_) => {
                        // Deliberately generic; no username/password oracle.
                        error.set("Login failed. Please check your credentials.".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_dashboard, &username_value, &password_value);
        }
    };

    let on_google = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let origin = crate::net::gateway::base_url();
            let origin = origin.trim_end_matches('/');
            let origin = origin.strip_suffix("/api").unwrap_or(origin);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&format!("{origin}/accounts/google/login/"));
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Venti"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or"</p>
                <a href="#" class="login-button" on:click=on_google>
                    "Continue with Google"
                </a>
            </div>
        </div>
    }
}
