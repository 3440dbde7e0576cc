//! Wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's serializer output field-for-field so
//! views render exactly what the server returned; the client adds no
//! invariants of its own on top of them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `GET /users/{id}/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub xp_points: i64,
}

/// Access/refresh pair issued by `POST /token/` and the social-auth handoff.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// A club summary as returned by `GET /clubs/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub admin_username: String,
    pub members_count: i64,
    /// Room path for this club's chat, e.g. `/ws/chat/42/`.
    pub chat_websocket_url: String,
    #[serde(default)]
    pub is_member: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub requires_request: bool,
}

/// Full club record from `GET /clubs/{id}/`, including the member roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClubDetail {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub admin_username: String,
    #[serde(default)]
    pub admin_email: String,
    pub members_count: i64,
    pub chat_websocket_url: String,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// One club membership row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_subadmin: bool,
    #[serde(default)]
    pub joined_at: String,
}

/// A pending join request listed under `GET /clubs/{id}/requests/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub id: i64,
    pub user: RequestingUser,
}

/// The requesting user embedded in a [`JoinRequest`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestingUser {
    pub username: String,
}

/// An event, either club-scoped (`GET /clubs/{id}/events/`) or from the
/// global listing. The dashboard variant carries `club_name` instead of a
/// club id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    #[serde(default)]
    pub club: Option<i64>,
    #[serde(default)]
    pub club_name: Option<String>,
    pub title: String,
    pub description: String,
    pub date: String,
}

/// A club post surfaced on the dashboard feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub club_name: Option<String>,
    pub author_username: String,
    pub content: String,
    pub created_at: String,
}

/// A persisted chat message from `GET /messages/?club={id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: i64,
    pub club: i64,
    pub author_username: String,
    pub text: String,
    pub created_at: String,
}

/// One membership row in the dashboard aggregate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardMembership {
    pub club_id: i64,
    pub club_name: String,
}

/// The `GET /dashboard/` aggregate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default)]
    pub memberships: Vec<DashboardMembership>,
    pub clubs_count: i64,
    #[serde(default)]
    pub recent_posts: Vec<Post>,
    #[serde(default)]
    pub upcoming_events: Vec<Event>,
}
