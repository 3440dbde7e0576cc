//! Realtime chat panel.
//!
//! Owns one channel for the room it was mounted with: global chat on the
//! chat page, the club room on the club page. Club rooms also seed the
//! panel with persisted history before live frames start appending.

use leptos::prelude::*;

use crate::net::chat_client::{ChannelStatus, ChatHandle, can_send};
use crate::state::chat::ChatState;

#[component]
pub fn ChatPanel(
    /// Room path, e.g. `/ws/chat/` or the club's `chat_websocket_url`.
    room_path: String,
    /// Club id for history seeding; club rooms also authenticate the
    /// socket with the access token.
    #[prop(optional, into)]
    club_id: Option<i64>,
) -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let status = RwSignal::new(ChannelStatus::default());
    let draft = RwSignal::new(String::new());

    let handle: Option<ChatHandle> = {
        #[cfg(feature = "hydrate")]
        {
            Some(crate::net::chat_client::spawn_chat_client(
                room_path,
                club_id.is_some(),
                chat,
                status,
            ))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &room_path;
            None
        }
    };
    if let Some(cleanup) = handle.clone() {
        on_cleanup(move || cleanup.close());
    }

    if let Some(club_id) = club_id {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_club_messages(club_id).await {
                Ok(records) => chat.update(|c| c.seed_history(records)),
                Err(e) => leptos::logging::warn!("chat history fetch failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = club_id;
    }

    let status_label = move || match status.get() {
        ChannelStatus::Open => "Connected",
        ChannelStatus::Connecting => "Connecting...",
        ChannelStatus::Closed => "Disconnected",
    };

    let send_disabled = move || !can_send(status.get());

    let on_send = move || {
        let text = draft.get_untracked().trim().to_owned();
        if text.is_empty() {
            return;
        }
        if let Some(handle) = &handle {
            if handle.send(&text) {
                draft.set(String::new());
            }
        }
    };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_send();
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__header">
                <span class="chat-panel__title">"Chat"</span>
                <span
                    class="chat-panel__status"
                    class=("chat-panel__status--open", move || status.get() == ChannelStatus::Open)
                >
                    {status_label}
                </span>
            </div>
            <div class="chat-panel__messages">
                {move || {
                    chat.get()
                        .messages
                        .into_iter()
                        .map(|m| {
                            view! {
                                <div class="chat-panel__message">
                                    <span class="chat-panel__author">{m.author}</span>
                                    <span class="chat-panel__text">{m.text}</span>
                                    <span class="chat-panel__time">{m.timestamp}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <form class="chat-panel__compose" on:submit=on_submit>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Say something..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=send_disabled>
                    "Send"
                </button>
            </form>
        </div>
    }
}
