//! REST endpoint surface over the gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native/test builds: the generic [`ApiClient`] runs against any
//! [`Transport`], and the free helpers degrade to errors so pages compile
//! everywhere without touching the network.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::net::error::ApiError;
use crate::net::gateway::{Gateway, Transport};
use crate::net::types::{
    Club, ClubDetail, Dashboard, Event, JoinRequest, MessageRecord, TokenPair, User,
};
use crate::util::jwt::{Claims, decode_claims};
use crate::util::storage::TokenStore;

/// Resolution for a pending join request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestAction {
    Approve,
    Reject,
}

impl RequestAction {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestAction::Approve => "approve",
            RequestAction::Reject => "reject",
        }
    }
}

fn user_path(user_id: i64) -> String {
    format!("/users/{user_id}/")
}

fn club_path(club_id: i64) -> String {
    format!("/clubs/{club_id}/")
}

fn club_join_path(club_id: i64) -> String {
    format!("/clubs/{club_id}/join/")
}

fn club_requests_path(club_id: i64) -> String {
    format!("/clubs/{club_id}/requests/")
}

fn request_action_path(club_id: i64, request_id: i64, action: RequestAction) -> String {
    format!("/clubs/{club_id}/requests/{request_id}/{}/", action.as_str())
}

fn club_events_path(club_id: i64) -> String {
    format!("/clubs/{club_id}/events/")
}

fn club_messages_path(club_id: i64) -> String {
    format!("/messages/?club={club_id}")
}

/// Typed endpoint methods over a configured [`Gateway`].
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    gateway: Gateway<T, S>,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(gateway: Gateway<T, S>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Gateway<T, S> {
        &self.gateway
    }

    async fn get_json<D: DeserializeOwned>(&self, path: &str) -> Result<D, ApiError> {
        self.gateway.get(path).await?.json()
    }

    async fn post_json<D: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<D, ApiError> {
        self.gateway.post(path, Some(body)).await?.json()
    }

    // --- Session ---

    /// Exchange credentials for a token pair and persist it.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ApiError> {
        let pair: TokenPair = self
            .post_json("/token/", json!({ "username": username, "password": password }))
            .await?;
        self.gateway.tokens().store_pair(&pair.access, &pair.refresh);
        Ok(pair)
    }

    /// Persist an externally obtained pair (OAuth redirect).
    pub fn store_tokens(&self, access: &str, refresh: &str) {
        self.gateway.tokens().store_pair(access, refresh);
    }

    /// Drop both persisted tokens. Never calls the backend.
    pub fn clear_tokens(&self) {
        self.gateway.tokens().clear();
    }

    /// Claims from the persisted access token, if one decodes.
    pub fn access_claims(&self) -> Option<Claims> {
        let token = self.gateway.tokens().access_token()?;
        decode_claims(&token)
    }

    pub fn has_access_token(&self) -> bool {
        self.gateway.tokens().access_token().is_some()
    }

    // --- Resources ---

    pub async fn user(&self, user_id: i64) -> Result<User, ApiError> {
        self.get_json(&user_path(user_id)).await
    }

    pub async fn dashboard(&self) -> Result<Dashboard, ApiError> {
        self.get_json("/dashboard/").await
    }

    pub async fn clubs(&self) -> Result<Vec<Club>, ApiError> {
        self.get_json("/clubs/").await
    }

    pub async fn club(&self, club_id: i64) -> Result<ClubDetail, ApiError> {
        self.get_json(&club_path(club_id)).await
    }

    pub async fn create_club(&self, name: &str, description: &str) -> Result<Club, ApiError> {
        self.post_json("/clubs/", json!({ "name": name, "description": description }))
            .await
    }

    /// Join (or request to join) a club; returns the backend's detail line.
    pub async fn join_club(&self, club_id: i64) -> Result<String, ApiError> {
        let response = self.gateway.post(&club_join_path(club_id), None).await?;
        let detail = serde_json::from_str::<serde_json::Value>(&response.body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_owned))
            .unwrap_or_else(|| "Joined club.".to_owned());
        Ok(detail)
    }

    pub async fn club_join_requests(&self, club_id: i64) -> Result<Vec<JoinRequest>, ApiError> {
        self.get_json(&club_requests_path(club_id)).await
    }

    pub async fn handle_join_request(
        &self,
        club_id: i64,
        request_id: i64,
        action: RequestAction,
    ) -> Result<(), ApiError> {
        self.gateway
            .post(&request_action_path(club_id, request_id, action), None)
            .await?;
        Ok(())
    }

    pub async fn club_events(&self, club_id: i64) -> Result<Vec<Event>, ApiError> {
        self.get_json(&club_events_path(club_id)).await
    }

    pub async fn events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_json("/events/").await
    }

    pub async fn create_event(
        &self,
        title: &str,
        description: &str,
        date: &str,
        club_id: i64,
    ) -> Result<Event, ApiError> {
        self.post_json(
            "/events/",
            json!({ "title": title, "description": description, "date": date, "club": club_id }),
        )
        .await
    }

    pub async fn club_messages(&self, club_id: i64) -> Result<Vec<MessageRecord>, ApiError> {
        self.get_json(&club_messages_path(club_id)).await
    }
}

/// `gloo-net` transport used in the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl Transport for GlooTransport {
    async fn execute(
        &self,
        request: crate::net::gateway::HttpRequest,
    ) -> Result<crate::net::gateway::HttpResponse, ApiError> {
        use crate::net::gateway::Method;
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        if let Some(bearer) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {bearer}"));
        }
        let response = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(crate::net::gateway::HttpResponse { status, body })
    }
}

/// The browser client: gloo transport plus localStorage tokens.
#[cfg(feature = "hydrate")]
pub type BrowserApi = ApiClient<GlooTransport, crate::util::storage::BrowserTokens>;

#[cfg(feature = "hydrate")]
pub fn browser_client() -> BrowserApi {
    ApiClient::new(Gateway::new(
        crate::net::gateway::base_url(),
        GlooTransport,
        crate::util::storage::BrowserTokens,
    ))
}

/// Send the browser to the login entry point after a forced logout.
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

/// Map a gateway error, performing the forced-logout redirect when the
/// session turned out to be irrecoverable.
pub fn escalate(err: ApiError) -> ApiError {
    if matches!(err, ApiError::Unauthorized) {
        redirect_to_login();
    }
    err
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<D>() -> Result<D, ApiError> {
    Err(ApiError::Network("not available outside the browser".to_owned()))
}

macro_rules! browser_call {
    ($body:expr) => {{
        #[cfg(feature = "hydrate")]
        {
            $body.await.map_err(escalate)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            unavailable()
        }
    }};
}

// Free helpers for pages: each runs against the default browser client.

pub async fn fetch_dashboard() -> Result<Dashboard, ApiError> {
    browser_call!(browser_client().dashboard())
}

pub async fn fetch_clubs() -> Result<Vec<Club>, ApiError> {
    browser_call!(browser_client().clubs())
}

pub async fn fetch_club(club_id: i64) -> Result<ClubDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser_client().club(club_id).await.map_err(escalate)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = club_id;
        unavailable()
    }
}

pub async fn fetch_club_events(club_id: i64) -> Result<Vec<Event>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser_client().club_events(club_id).await.map_err(escalate)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = club_id;
        unavailable()
    }
}

pub async fn fetch_events() -> Result<Vec<Event>, ApiError> {
    browser_call!(browser_client().events())
}

pub async fn fetch_club_messages(club_id: i64) -> Result<Vec<MessageRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser_client().club_messages(club_id).await.map_err(escalate)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = club_id;
        unavailable()
    }
}

pub async fn join_club(club_id: i64) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser_client().join_club(club_id).await.map_err(escalate)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = club_id;
        unavailable()
    }
}

pub async fn create_club(name: &str, description: &str) -> Result<Club, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser_client().create_club(name, description).await.map_err(escalate)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, description);
        unavailable()
    }
}

pub async fn create_event(
    title: &str,
    description: &str,
    date: &str,
    club_id: i64,
) -> Result<Event, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser_client()
            .create_event(title, description, date, club_id)
            .await
            .map_err(escalate)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, description, date, club_id);
        unavailable()
    }
}

pub async fn fetch_join_requests(club_id: i64) -> Result<Vec<JoinRequest>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser_client().club_join_requests(club_id).await.map_err(escalate)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = club_id;
        unavailable()
    }
}

pub async fn handle_join_request(
    club_id: i64,
    request_id: i64,
    action: RequestAction,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser_client()
            .handle_join_request(club_id, request_id, action)
            .await
            .map_err(escalate)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (club_id, request_id, action);
        unavailable()
    }
}
