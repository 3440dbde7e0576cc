//! Networking modules for the REST gateway and realtime chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns bearer attachment and the refresh/replay flow, `api`
//! exposes the typed endpoint surface, `chat_client` manages the
//! websocket lifecycle, and `types` defines the shared wire schema.

pub mod api;
pub mod chat_client;
pub mod error;
pub mod gateway;
pub mod types;
