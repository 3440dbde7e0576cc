//! Token persistence behind an explicit store seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway takes a [`TokenStore`] collaborator instead of reading
//! ambient storage, so the refresh/replay flow can be exercised without a
//! browser. The browser store keeps the two plain string values in
//! `localStorage` (survives reload; no encryption, no rotation beyond the
//! refresh exchange).

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Credential provider used by the gateway and the session store.
pub trait TokenStore {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    /// Persist a fresh access/refresh pair (login, social callback).
    fn store_pair(&self, access: &str, refresh: &str);
    /// Persist only a renewed access token (refresh exchange).
    fn store_access(&self, access: &str);
    /// Drop both tokens.
    fn clear(&self);
}

/// `localStorage`-backed store. Outside the browser every read is `None`
/// and every write is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokens {
    fn access_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().and_then(|s| s.get_item(ACCESS_TOKEN_KEY).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn refresh_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().and_then(|s| s.get_item(REFRESH_TOKEN_KEY).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store_pair(&self, access: &str, refresh: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
                let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (access, refresh);
        }
    }

    fn store_access(&self, access: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = access;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(ACCESS_TOKEN_KEY);
                let _ = storage.remove_item(REFRESH_TOKEN_KEY);
            }
        }
    }
}

/// In-memory store for tests and non-browser consumers.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokens {
    inner: std::rc::Rc<std::cell::RefCell<TokenCell>>,
}

#[derive(Debug, Default)]
struct TokenCell {
    access: Option<String>,
    refresh: Option<String>,
}

impl TokenStore for MemoryTokens {
    fn access_token(&self) -> Option<String> {
        self.inner.borrow().access.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.inner.borrow().refresh.clone()
    }

    fn store_pair(&self, access: &str, refresh: &str) {
        let mut cell = self.inner.borrow_mut();
        cell.access = Some(access.to_owned());
        cell.refresh = Some(refresh.to_owned());
    }

    fn store_access(&self, access: &str) {
        self.inner.borrow_mut().access = Some(access.to_owned());
    }

    fn clear(&self) {
        let mut cell = self.inner.borrow_mut();
        cell.access = None;
        cell.refresh = None;
    }
}
