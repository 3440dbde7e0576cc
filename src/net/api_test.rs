use futures::executor::block_on;

use super::*;
use crate::net::gateway::Gateway;
use crate::net::gateway::gateway_test::ScriptedTransport;
use crate::util::storage::MemoryTokens;

fn client<'a>(
    transport: &'a ScriptedTransport,
    tokens: &MemoryTokens,
) -> ApiClient<&'a ScriptedTransport, MemoryTokens> {
    ApiClient::new(Gateway::new("http://api.test/api", transport, tokens.clone()))
}

#[test]
fn endpoint_paths_match_the_backend_router() {
    assert_eq!(user_path(7), "/users/7/");
    assert_eq!(club_path(3), "/clubs/3/");
    assert_eq!(club_join_path(3), "/clubs/3/join/");
    assert_eq!(club_requests_path(3), "/clubs/3/requests/");
    assert_eq!(
        request_action_path(3, 11, RequestAction::Approve),
        "/clubs/3/requests/11/approve/"
    );
    assert_eq!(
        request_action_path(3, 11, RequestAction::Reject),
        "/clubs/3/requests/11/reject/"
    );
    assert_eq!(club_events_path(3), "/clubs/3/events/");
    assert_eq!(club_messages_path(3), "/messages/?club=3");
}

#[test]
fn login_persists_pair_and_posts_credentials() {
    let transport = ScriptedTransport::default();
    transport.respond(200, r#"{"access":"A1","refresh":"R1"}"#);
    let tokens = MemoryTokens::default();

    let api = client(&transport, &tokens);
    let pair = block_on(api.login("alice", "pw")).expect("login should succeed");
    assert_eq!(pair.access, "A1");
    assert_eq!(tokens.access_token().as_deref(), Some("A1"));
    assert_eq!(tokens.refresh_token().as_deref(), Some("R1"));

    let requests = transport.requests.borrow();
    assert_eq!(requests[0].url, "http://api.test/api/token/");
    assert_eq!(
        requests[0].body.as_ref().and_then(|b| b.get("username")).and_then(|v| v.as_str()),
        Some("alice")
    );
}

#[test]
fn failed_login_leaves_store_empty() {
    let transport = ScriptedTransport::default();
    transport.respond(401, r#"{"detail":"No active account found"}"#);
    let tokens = MemoryTokens::default();

    let api = client(&transport, &tokens);
    let err = block_on(api.login("alice", "wrong")).expect_err("bad credentials should fail");
    assert_eq!(err.user_message(), "No active account found");
    assert_eq!(tokens.access_token(), None);
}

#[test]
fn join_club_surfaces_backend_detail() {
    let transport = ScriptedTransport::default();
    transport.respond(200, r#"{"detail":"Join request submitted for approval."}"#);
    let api = client(&transport, &MemoryTokens::default());

    let detail = block_on(api.join_club(5)).expect("join should succeed");
    assert_eq!(detail, "Join request submitted for approval.");
}

#[test]
fn join_club_defaults_detail_when_body_is_bare() {
    let transport = ScriptedTransport::default();
    transport.respond(200, "{}");
    let api = client(&transport, &MemoryTokens::default());

    let detail = block_on(api.join_club(5)).expect("join should succeed");
    assert_eq!(detail, "Joined club.");
}

#[test]
fn access_claims_come_from_the_persisted_token() {
    let tokens = MemoryTokens::default();
    let transport = ScriptedTransport::default();
    let api = client(&transport, &tokens);
    assert_eq!(api.access_claims(), None);

    tokens.store_pair(
        &crate::util::jwt::jwt_test::token_with_payload(r#"{"user_id": 42}"#),
        "R1",
    );
    assert_eq!(api.access_claims().map(|c| c.user_id), Some(42));
}

#[test]
fn create_event_posts_club_scoped_payload() {
    let transport = ScriptedTransport::default();
    transport.respond(
        200,
        r#"{"id": 1, "club": 5, "title": "t", "description": "d", "date": "2024-06-01T18:00"}"#,
    );
    let api = client(&transport, &MemoryTokens::default());

    let event =
        block_on(api.create_event("t", "d", "2024-06-01T18:00", 5)).expect("create should succeed");
    assert_eq!(event.club, Some(5));

    let requests = transport.requests.borrow();
    assert_eq!(
        requests[0].body.as_ref().and_then(|b| b.get("club")).and_then(|v| v.as_i64()),
        Some(5)
    );
}
