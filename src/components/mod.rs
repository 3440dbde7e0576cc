//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and cards while reading shared state
//! from Leptos context providers; pages own route-scoped orchestration.

pub mod chat_panel;
pub mod club_card;
pub mod error_display;
pub mod event_card;
pub mod layout;
pub mod loading;
pub mod post_card;
pub mod stat_card;
