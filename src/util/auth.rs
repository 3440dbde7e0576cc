//! Shared auth UI helpers.
//!
//! Every authenticated route applies the same unauthenticated redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::SessionState;

/// True once the startup token check has settled with nobody signed in.
pub fn should_redirect_unauth(session: &SessionState) -> bool {
    !session.loading && session.user.is_none()
}

/// Redirect to `/login` whenever the session has settled without a user.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
