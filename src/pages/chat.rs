//! Site-wide chat page backed by the global room.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::chat_panel::ChatPanel;
use crate::components::layout::AppLayout;
use crate::net::chat_client::GLOBAL_CHAT_PATH;
use crate::state::auth::SessionState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    view! {
        <AppLayout>
            <div class="chat-page">
                <h1 class="chat-page__title">"Global Chat"</h1>
                <ChatPanel room_path=GLOBAL_CHAT_PATH.to_owned()/>
            </div>
        </AppLayout>
    }
}
