//! WebSocket chat client.
//!
//! One connection per chat surface, owned by the view that opened it. The
//! spawned loop reconnects with exponential backoff until the owning view
//! drops its [`ChatHandle`], which closes the socket on every exit path.
//!
//! All socket I/O is gated behind `hydrate`; URL derivation, frame
//! encoding/parsing, and the send gate are plain functions that compile
//! and test natively.
//!
//! ERROR HANDLING
//! ==============
//! A malformed inbound frame is logged and skipped so a bad payload can
//! never take down the view; sends while the channel is not open are
//! refused, never buffered.

#[cfg(test)]
#[path = "chat_client_test.rs"]
mod chat_client_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::{GetUntracked, RwSignal};

use crate::state::chat::ChatMessage;

/// Room path of the site-wide chat; club rooms come from the club payload.
pub const GLOBAL_CHAT_PATH: &str = "/ws/chat/";

pub const INITIAL_BACKOFF_MS: u32 = 1_000;
pub const MAX_BACKOFF_MS: u32 = 10_000;

/// Transport state of one channel instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelStatus {
    #[default]
    Closed,
    Connecting,
    Open,
}

/// Outbound sends are accepted only while the channel reports itself open.
pub fn can_send(status: ChannelStatus) -> bool {
    status == ChannelStatus::Open
}

/// Double the reconnect delay up to the cap.
pub fn next_backoff_ms(current_ms: u32) -> u32 {
    (current_ms.saturating_mul(2)).min(MAX_BACKOFF_MS)
}

/// Derive the socket URL from the REST origin: `http`→`ws`, `https`→`wss`,
/// same host, with the access token as a query credential for club rooms.
pub fn websocket_url(api_base: &str, room_path: &str, token: Option<&str>) -> String {
    let origin = api_base.trim_end_matches('/');
    let origin = origin.strip_suffix("/api").unwrap_or(origin);
    let ws_origin = if let Some(rest) = origin.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = origin.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        format!("ws://{origin}")
    };
    match token {
        Some(token) => format!("{ws_origin}{room_path}?token={token}"),
        None => format!("{ws_origin}{room_path}"),
    }
}

/// Parse one inbound text frame. The canonical frame is the broadcast
/// record `{"message", "sender", "timestamp"}`; anything without a string
/// `message` is rejected.
pub fn parse_inbound(text: &str) -> Option<ChatMessage> {
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    let message = value.get("message")?.as_str()?.to_owned();
    let author = value
        .get("sender")
        .and_then(|v| v.as_str())
        .unwrap_or("Anonymous")
        .to_owned();
    let timestamp = value
        .get("timestamp")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_owned();
    Some(ChatMessage {
        id: None,
        author,
        text: message,
        timestamp,
    })
}

/// Encode one outbound frame.
pub fn outbound_frame(text: &str) -> String {
    serde_json::json!({ "message": text }).to_string()
}

/// Handle owned by the view that opened the channel. Dropping the view
/// calls [`ChatHandle::close`] from its cleanup, which ends the loop and
/// closes the socket.
#[derive(Clone, Debug)]
pub struct ChatHandle {
    tx: futures::channel::mpsc::UnboundedSender<String>,
    alive: Arc<AtomicBool>,
    status: RwSignal<ChannelStatus>,
}

impl ChatHandle {
    /// Send a message; refused (returns `false`) while not open.
    pub fn send(&self, text: &str) -> bool {
        if !can_send(self.status.get_untracked()) {
            return false;
        }
        self.tx.unbounded_send(outbound_frame(text)).is_ok()
    }

    /// Stop the reconnect loop and close the socket.
    pub fn close(&self) {
        self.alive.store(false, Ordering::Relaxed);
        self.tx.close_channel();
    }
}

/// Open a channel for `room_path` and keep it alive with reconnect and
/// exponential backoff until the handle is closed. Club rooms re-read the
/// access token on every attempt so a refreshed token is picked up.
#[cfg(feature = "hydrate")]
pub fn spawn_chat_client(
    room_path: String,
    with_token: bool,
    chat: RwSignal<crate::state::chat::ChatState>,
    status: RwSignal<ChannelStatus>,
) -> ChatHandle {
    let (tx, rx) = futures::channel::mpsc::unbounded::<String>();
    let alive = Arc::new(AtomicBool::new(true));
    let handle = ChatHandle {
        tx,
        alive: alive.clone(),
        status,
    };
    leptos::task::spawn_local(channel_loop(room_path, with_token, chat, status, alive, rx));
    handle
}

#[cfg(feature = "hydrate")]
async fn channel_loop(
    room_path: String,
    with_token: bool,
    chat: RwSignal<crate::state::chat::ChatState>,
    status: RwSignal<ChannelStatus>,
    alive: Arc<AtomicBool>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use leptos::prelude::Set;

    use crate::util::storage::{BrowserTokens, TokenStore};

    let rx = std::rc::Rc::new(std::cell::RefCell::new(rx));
    let mut backoff_ms = INITIAL_BACKOFF_MS;

    while alive.load(Ordering::Relaxed) {
        status.set(ChannelStatus::Connecting);

        let token = if with_token { BrowserTokens.access_token() } else { None };
        let url = websocket_url(&crate::net::gateway::base_url(), &room_path, token.as_deref());

        match connect_and_pump(&url, chat, status, &rx).await {
            Ok(()) => {
                leptos::logging::log!("chat socket closed: {room_path}");
                backoff_ms = INITIAL_BACKOFF_MS;
            }
            Err(e) => {
                leptos::logging::warn!("chat socket error: {e}");
            }
        }
        status.set(ChannelStatus::Closed);

        if !alive.load(Ordering::Relaxed) {
            break;
        }
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = next_backoff_ms(backoff_ms);
    }
    status.set(ChannelStatus::Closed);
}

/// Connect and pump frames both ways until either side ends.
#[cfg(feature = "hydrate")]
async fn connect_and_pump(
    url: &str,
    chat: RwSignal<crate::state::chat::ChatState>,
    status: RwSignal<ChannelStatus>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::{Message, futures::WebSocket};
    use leptos::prelude::{Set, Update};

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    status.set(ChannelStatus::Open);

    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        while let Some(frame) = rx_borrow.next().await {
            if ws_write.send(Message::Text(frame)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match parse_inbound(&text) {
                    Some(message) => chat.update(|c| c.push(message)),
                    None => leptos::logging::warn!("dropping malformed chat frame: {text}"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("chat recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    Ok(())
}
