//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, redirects, dialog
//! state) and delegates rendering details to `components`.

pub mod auth_callback;
pub mod chat;
pub mod club;
pub mod clubs;
pub mod dashboard;
pub mod events;
pub mod landing;
pub mod login;
