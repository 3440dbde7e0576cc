use super::*;

#[test]
fn club_summary_deserializes_serializer_shape() {
    let json = r#"{
        "id": 3,
        "name": "Chess Club",
        "description": "Weekly games",
        "admin_username": "bob",
        "members_count": 12,
        "chat_websocket_url": "/ws/chat/3/"
    }"#;
    let club: Club = serde_json::from_str(json).expect("club should parse");
    assert_eq!(club.id, 3);
    assert_eq!(club.chat_websocket_url, "/ws/chat/3/");
    // Membership flags default to false when the backend omits them.
    assert!(!club.is_member);
    assert!(!club.is_admin);
}

#[test]
fn club_detail_tolerates_missing_roster_fields() {
    let json = r#"{
        "id": 3,
        "name": "Chess Club",
        "description": "Weekly games",
        "admin_username": "bob",
        "members_count": 1,
        "chat_websocket_url": "/ws/chat/3/",
        "members": [{"username": "ann"}]
    }"#;
    let detail: ClubDetail = serde_json::from_str(json).expect("detail should parse");
    assert!(detail.is_active);
    assert_eq!(detail.members.len(), 1);
    assert_eq!(detail.members[0].username, "ann");
    assert!(!detail.members[0].is_subadmin);
}

#[test]
fn dashboard_aggregate_deserializes() {
    let json = r#"{
        "memberships": [{"club_id": 1, "club_name": "Chess Club"}],
        "clubs_count": 1,
        "recent_posts": [
            {"id": 9, "club_name": "Chess Club", "author_username": "ann",
             "content": "hi", "created_at": "2024-05-01T10:00:00Z"}
        ],
        "upcoming_events": [
            {"id": 4, "club_name": "Chess Club", "title": "Blitz night",
             "description": "5+0", "date": "2024-06-01T18:00:00Z"}
        ]
    }"#;
    let dash: Dashboard = serde_json::from_str(json).expect("dashboard should parse");
    assert_eq!(dash.clubs_count, 1);
    assert_eq!(dash.upcoming_events[0].club, None);
    assert_eq!(dash.upcoming_events[0].club_name.as_deref(), Some("Chess Club"));
}

#[test]
fn event_accepts_club_id_variant() {
    let json = r#"{"id": 2, "club": 7, "title": "t", "description": "d", "date": "2024-01-01"}"#;
    let event: Event = serde_json::from_str(json).expect("event should parse");
    assert_eq!(event.club, Some(7));
    assert_eq!(event.club_name, None);
}

#[test]
fn join_request_parses_nested_user() {
    let json = r#"{"id": 11, "user": {"username": "carol", "email": "c@x.y"}}"#;
    let req: JoinRequest = serde_json::from_str(json).expect("request should parse");
    assert_eq!(req.id, 11);
    assert_eq!(req.user.username, "carol");
}
