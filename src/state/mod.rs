//! Shared application state provided through Leptos context.

pub mod auth;
pub mod chat;
