//! HTTP gateway: bearer attachment and the single refresh-and-replay.
//!
//! DESIGN
//! ======
//! The gateway owns two seams so the recovery flow is testable without a
//! browser: a [`Transport`] that executes one HTTP exchange, and a
//! [`TokenStore`] credential provider. On a 401 it performs exactly one
//! transparent recovery — refresh, persist, replay — and the replay's
//! outcome is final; a second 401 passes through to the caller unchanged,
//! so no refresh loop is possible by construction.

#[cfg(test)]
#[path = "gateway_test.rs"]
pub(crate) mod gateway_test;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::net::error::ApiError;
use crate::util::storage::TokenStore;

/// Default REST origin; override at build time with `VENTI_API_URL`.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Resolve the REST base URL from the build environment.
pub fn base_url() -> String {
    option_env!("VENTI_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outgoing HTTP exchange as seen by the [`Transport`].
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

/// The raw response the transport produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body, mapping parse failures to [`ApiError::Decode`].
    pub fn json<D: DeserializeOwned>(&self) -> Result<D, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Executes a single HTTP exchange. Implemented over `gloo-net` in the
/// browser and by a scripted double in tests.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Configured HTTP client: one base URL, one transport, one token store.
#[derive(Clone, Debug)]
pub struct Gateway<T, S> {
    base_url: String,
    transport: T,
    tokens: S,
}

impl<T: Transport, S: TokenStore> Gateway<T, S> {
    pub fn new(base_url: impl Into<String>, transport: T, tokens: S) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    pub async fn get(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<HttpResponse, ApiError> {
        self.request(Method::Post, path, body).await
    }

    /// Send a request with the persisted bearer token attached.
    ///
    /// A 401 answer triggers the one-shot recovery described in the module
    /// docs. Every other non-success status maps to [`ApiError::Status`].
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let first = self
            .transport
            .execute(HttpRequest {
                method,
                url: url.clone(),
                body: body.clone(),
                bearer: self.tokens.access_token(),
            })
            .await?;

        if first.status != 401 {
            return into_result(first);
        }

        // Without a refresh token there is nothing to recover; the 401
        // belongs to the caller (e.g. a failed login attempt).
        let Some(refresh) = self.tokens.refresh_token() else {
            return into_result(first);
        };

        let access = match self.exchange_refresh(&refresh).await {
            Ok(access) => access,
            Err(err) => {
                // Irrecoverable session: drop credentials before surfacing.
                self.tokens.clear();
                return Err(err);
            }
        };
        self.tokens.store_access(&access);

        let replay = self
            .transport
            .execute(HttpRequest {
                method,
                url,
                body,
                bearer: Some(access),
            })
            .await?;
        into_result(replay)
    }

    async fn exchange_refresh(&self, refresh: &str) -> Result<String, ApiError> {
        let response = self
            .transport
            .execute(HttpRequest {
                method: Method::Post,
                url: format!("{}/token/refresh/", self.base_url),
                body: Some(json!({ "refresh": refresh })),
                bearer: None,
            })
            .await
            .map_err(|_| ApiError::Unauthorized)?;
        if !response.is_success() {
            return Err(ApiError::Unauthorized);
        }
        let renewed: RefreshResponse = response.json().map_err(|_| ApiError::Unauthorized)?;
        Ok(renewed.access)
    }
}

#[derive(serde::Deserialize)]
struct RefreshResponse {
    access: String,
}

fn into_result(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status,
            body: response.body,
        })
    }
}
