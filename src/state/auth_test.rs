use futures::executor::block_on;

use super::*;
use crate::net::gateway::Gateway;
use crate::net::gateway::gateway_test::ScriptedTransport;
use crate::util::jwt::jwt_test::token_with_payload;
use crate::util::storage::MemoryTokens;

fn client<'a>(
    transport: &'a ScriptedTransport,
    tokens: &MemoryTokens,
) -> ApiClient<&'a ScriptedTransport, MemoryTokens> {
    ApiClient::new(Gateway::new("http://api.test/api", transport, tokens.clone()))
}

#[test]
fn session_starts_loading_and_unauthenticated() {
    let session = SessionState::default();
    assert!(session.loading);
    assert!(!session.is_authenticated());

    let settled = SessionState::resolved(None);
    assert!(!settled.loading);
}

#[test]
fn no_stored_token_resolves_to_signed_out_without_network() {
    let transport = ScriptedTransport::default();
    let tokens = MemoryTokens::default();

    let user = block_on(resolve_user(&client(&transport, &tokens)));
    assert_eq!(user, None);
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn undecodable_token_is_cleared_and_resolves_signed_out() {
    let transport = ScriptedTransport::default();
    let tokens = MemoryTokens::default();
    tokens.store_pair("garbage", "R1");

    let user = block_on(resolve_user(&client(&transport, &tokens)));
    assert_eq!(user, None);
    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn valid_token_resolves_the_embedded_user() {
    let transport = ScriptedTransport::default();
    transport.respond(200, r#"{"id": 42, "username": "ann", "email": "a@x.io", "xp_points": 7}"#);
    let tokens = MemoryTokens::default();
    tokens.store_pair(&token_with_payload(r#"{"user_id": 42}"#), "R1");

    let user = block_on(resolve_user(&client(&transport, &tokens))).expect("user should resolve");
    assert_eq!(user.id, 42);
    assert_eq!(user.username, "ann");

    let requests = transport.requests.borrow();
    assert_eq!(requests[0].url, "http://api.test/api/users/42/");
    assert_eq!(requests[0].bearer.as_deref(), Some(tokens.access_token().unwrap().as_str()));
}

#[test]
fn failed_user_fetch_clears_the_pair() {
    let transport = ScriptedTransport::default();
    transport.respond(500, r#"{"detail": "boom"}"#);
    let tokens = MemoryTokens::default();
    tokens.store_pair(&token_with_payload(r#"{"user_id": 42}"#), "R1");

    let user = block_on(resolve_user(&client(&transport, &tokens)));
    assert_eq!(user, None);
    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);
}

#[test]
fn login_with_lands_on_the_user_record() {
    let transport = ScriptedTransport::default();
    let access = token_with_payload(r#"{"user_id": 42}"#);
    transport.respond(200, &format!(r#"{{"access":"{access}","refresh":"R1"}}"#));
    transport.respond(200, r#"{"id": 42, "username": "ann", "email": "a@x.io"}"#);
    let tokens = MemoryTokens::default();

    let user =
        block_on(login_with(&client(&transport, &tokens), "ann", "pw")).expect("login should land");
    assert_eq!(user.id, 42);
    assert_eq!(tokens.refresh_token().as_deref(), Some("R1"));
    assert!(SessionState::resolved(Some(user)).is_authenticated());

    let requests = transport.requests.borrow();
    assert_eq!(requests[0].url, "http://api.test/api/token/");
    assert_eq!(requests[1].url, "http://api.test/api/users/42/");
}

#[test]
fn login_with_surfaces_bad_credentials() {
    let transport = ScriptedTransport::default();
    transport.respond(401, r#"{"detail": "No active account found"}"#);
    let tokens = MemoryTokens::default();

    let err = block_on(login_with(&client(&transport, &tokens), "ann", "nope"))
        .expect_err("bad credentials should fail");
    assert_eq!(err.user_message(), "No active account found");
    assert!(tokens.access_token().is_none());
}
