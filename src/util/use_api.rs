//! Declarative data fetching for pages.
//!
//! [`use_api`] wraps one async endpoint call in a `{data, loading, error}`
//! signal plus a `refetch` trigger. A fetch started by a view that has
//! since been cleaned up resolves into the void instead of a dead signal.

#[cfg(test)]
#[path = "use_api_test.rs"]
mod use_api_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::{Effect, RwSignal, Track, Update, on_cleanup};

use crate::net::error::ApiError;

/// Lifecycle of one fetched value.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    /// Last successful payload; kept visible while a refetch is in flight.
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// A (re)fetch begins: raise the loading flag and drop any stale error.
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn resolve(&mut self, data: T) {
        self.data = Some(data);
        self.loading = false;
        self.error = None;
    }

    pub fn reject(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

/// Handle returned by [`use_api`]. `state` drives the view; `refetch`
/// reruns the fetch in place.
#[derive(Debug)]
pub struct ApiResource<T: Send + Sync + 'static> {
    pub state: RwSignal<FetchState<T>>,
    version: RwSignal<u32>,
}

impl<T: Send + Sync + 'static> Clone for ApiResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ApiResource<T> {}

impl<T: Send + Sync + 'static> ApiResource<T> {
    pub fn refetch(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }
}

/// Run `fetch` once on mount and again on every [`ApiResource::refetch`].
///
/// Errors land as the display string from
/// [`ApiError::user_message`]; a forced-logout redirect has already
/// happened by the time an `Unauthorized` error reaches here.
pub fn use_api<T, Fut, F>(fetch: F) -> ApiResource<T>
where
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    F: Fn() -> Fut + 'static,
{
    let state = RwSignal::new(FetchState::default());
    let version = RwSignal::new(0_u32);

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });

    Effect::new(move |_| {
        version.track();
        state.update(FetchState::start);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            let fut = fetch();
            leptos::task::spawn_local(async move {
                let result = fut.await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(data) => state.update(|s| s.resolve(data)),
                    Err(err) => state.update(|s| s.reject(err.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&fetch, &alive);
        }
    });

    ApiResource { state, version }
}
