//! OAuth landing route.
//!
//! The backend finishes the Google handshake and redirects here with the
//! freshly minted pair in the query string. Persist it, resolve the
//! session, and move on; anything malformed bounces back to login with an
//! error marker.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::SessionState;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let handled = RwSignal::new(false);
    Effect::new(move || {
        if handled.get() {
            return;
        }
        let params = query.get();
        let access = params.get("access_token");
        let refresh = params.get("refresh_token");
        handled.set(true);

        #[cfg(feature = "hydrate")]
        {
            let landed = match (access, refresh) {
                (Some(access), Some(refresh)) => {
                    crate::state::auth::complete_social_auth(session, &access, &refresh)
                }
                _ => false,
            };
            if landed {
                navigate("/dashboard", NavigateOptions::default());
            } else {
                navigate("/login?error=social_auth_failed", NavigateOptions::default());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, access, refresh, session);
        }
    });

    view! {
        <div class="auth-callback-page">
            <p>"Finishing sign-in..."</p>
        </div>
    }
}
