//! Session state: who is signed in, resolved once from persisted tokens.
//!
//! The session starts in `loading` until the persisted access token has
//! been decoded and the matching user fetched. Any failure along that
//! path clears the stored pair and lands on "signed out" rather than an
//! error state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::gateway::Transport;
use crate::net::types::User;
use crate::util::storage::TokenStore;

/// Current session, shared through context.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True until the startup token check has settled.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn resolved(user: Option<User>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Resolve the signed-in user from whatever pair is persisted.
///
/// No token, an undecodable token, or a failed user fetch all resolve to
/// `None`; the latter two also clear the stored pair so the next startup
/// begins clean.
pub async fn resolve_user<T: Transport, S: TokenStore>(api: &ApiClient<T, S>) -> Option<User> {
    let Some(claims) = api.access_claims() else {
        if api.has_access_token() {
            api.clear_tokens();
        }
        return None;
    };
    match api.user(claims.user_id).await {
        Ok(user) => Some(user),
        Err(_) => {
            api.clear_tokens();
            None
        }
    }
}

/// Exchange credentials for a session: token pair first, then the user
/// record the access token points at.
pub async fn login_with<T: Transport, S: TokenStore>(
    api: &ApiClient<T, S>,
    username: &str,
    password: &str,
) -> Result<User, ApiError> {
    api.login(username, password).await?;
    match resolve_user(api).await {
        Some(user) => Ok(user),
        None => Err(ApiError::Decode("access token did not decode".to_owned())),
    }
}

/// Kick off the startup token check and settle the shared session signal.
#[cfg(feature = "hydrate")]
pub fn initialize(session: leptos::prelude::RwSignal<SessionState>) {
    use leptos::prelude::Set;
    leptos::task::spawn_local(async move {
        let api = crate::net::api::browser_client();
        let user = resolve_user(&api).await;
        session.set(SessionState::resolved(user));
    });
}

/// Interactive login from the login form.
#[cfg(feature = "hydrate")]
pub async fn login(
    session: leptos::prelude::RwSignal<SessionState>,
    username: &str,
    password: &str,
) -> Result<(), ApiError> {
    use leptos::prelude::Set;
    let api = crate::net::api::browser_client();
    let user = login_with(&api, username, password).await?;
    session.set(SessionState::resolved(Some(user)));
    Ok(())
}

/// Finish an OAuth redirect: persist the pair handed over in the callback
/// query and resolve the session from it. Returns `false` when the handed
/// pair is unusable.
#[cfg(feature = "hydrate")]
pub fn complete_social_auth(
    session: leptos::prelude::RwSignal<SessionState>,
    access: &str,
    refresh: &str,
) -> bool {
    let api = crate::net::api::browser_client();
    api.store_tokens(access, refresh);
    if api.access_claims().is_none() {
        api.clear_tokens();
        return false;
    }
    initialize(session);
    true
}

/// Drop the persisted pair and send the browser back to login. Purely
/// client-side, the backend keeps no session.
pub fn logout(session: leptos::prelude::RwSignal<SessionState>) {
    use leptos::prelude::Set;
    #[cfg(feature = "hydrate")]
    {
        crate::net::api::browser_client().clear_tokens();
    }
    session.set(SessionState::resolved(None));
    crate::net::api::redirect_to_login();
}
