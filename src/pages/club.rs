//! Club detail page: about, events, members, join requests, and the
//! club's chat room.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::chat_panel::ChatPanel;
use crate::components::error_display::ErrorDisplay;
use crate::components::event_card::EventCard;
use crate::components::layout::AppLayout;
use crate::components::loading::LoadingSpinner;
use crate::net::api::RequestAction;
use crate::net::types::Member;
use crate::state::auth::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::use_api::use_api;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    About,
    Events,
    Members,
    Requests,
}

#[component]
pub fn ClubPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let params = use_params_map();
    let club_id = move || {
        params
            .get()
            .get("id")
            .and_then(|id| id.parse::<i64>().ok())
            .unwrap_or_default()
    };

    let detail = use_api(move || crate::net::api::fetch_club(club_id()));
    let state = detail.state;
    let retry = Callback::new(move |()| detail.refetch());

    let tab = RwSignal::new(Tab::About);
    let tab_button = move |target: Tab, label: &'static str| {
        view! {
            <button
                class="club-page__tab"
                class=("club-page__tab--active", move || tab.get() == target)
                on:click=move |_| tab.set(target)
            >
                {label}
            </button>
        }
    };

    let is_admin = move || {
        let admin = state.get().data.map(|d| d.admin_username);
        let me = session.get().user.map(|u| u.username);
        admin.is_some() && admin == me
    };

    view! {
        <AppLayout>
            <div class="club-page">
                {move || {
                    state.get().error.map(|message| view! {
                        <ErrorDisplay message=message on_retry=retry/>
                    })
                }}
                {move || {
                    let Some(club) = state.get().data else {
                        return view! { <LoadingSpinner label="Loading club..."/> }.into_any();
                    };
                    let members = club.members.clone();
                    let room_path = club.chat_websocket_url.clone();
                    let id = club.id;
                    view! {
                        <header class="club-page__header">
                            <h1>{club.name.clone()}</h1>
                            <span class="club-page__meta">
                                {format!("{} members, run by {}", club.members_count, club.admin_username)}
                            </span>
                        </header>
                        <nav class="club-page__tabs">
                            {tab_button(Tab::About, "About")}
                            {tab_button(Tab::Events, "Events")}
                            {tab_button(Tab::Members, "Members")}
                            <Show when=is_admin>{tab_button(Tab::Requests, "Requests")}</Show>
                        </nav>
                        <div class="club-page__body">
                            <div class="club-page__tab-content">
                                {move || match tab.get() {
                                    Tab::About => view! {
                                        <p class="club-page__description">
                                            {club.description.clone()}
                                        </p>
                                    }
                                    .into_any(),
                                    Tab::Events => view! { <ClubEventsTab club_id=id/> }.into_any(),
                                    Tab::Members => view! {
                                        <MembersList members=members.clone()/>
                                    }
                                    .into_any(),
                                    Tab::Requests => view! {
                                        <RequestsTab club_id=id on_changed=retry/>
                                    }
                                    .into_any(),
                                }}
                            </div>
                            <ChatPanel room_path=room_path club_id=id/>
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </AppLayout>
    }
}

#[component]
fn MembersList(members: Vec<Member>) -> impl IntoView {
    view! {
        <ul class="club-page__members">
            {members
                .into_iter()
                .map(|member| {
                    view! {
                        <li class="club-page__member">
                            <span class="club-page__member-name">{member.username}</span>
                            {member.is_subadmin.then(|| {
                                view! { <span class="club-page__member-badge">"Subadmin"</span> }
                            })}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
fn ClubEventsTab(club_id: i64) -> impl IntoView {
    let events = use_api(move || crate::net::api::fetch_club_events(club_id));
    let state = events.state;
    let retry = Callback::new(move |()| events.refetch());

    view! {
        <div class="club-page__events">
            {move || {
                state.get().error.map(|message| view! {
                    <ErrorDisplay message=message on_retry=retry/>
                })
            }}
            {move || {
                let Some(events) = state.get().data else {
                    return view! { <LoadingSpinner/> }.into_any();
                };
                if events.is_empty() {
                    return view! { <p class="club-page__empty">"No events scheduled."</p> }
                        .into_any();
                }
                view! {
                    <div>
                        {events
                            .into_iter()
                            .map(|event| view! { <EventCard event=event/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

/// Admin-only queue of pending join requests.
#[component]
fn RequestsTab(club_id: i64, on_changed: Callback<()>) -> impl IntoView {
    let requests = use_api(move || crate::net::api::fetch_join_requests(club_id));
    let state = requests.state;

    let act = move |request_id: i64, action: RequestAction| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::handle_join_request(club_id, request_id, action).await {
                Ok(()) => {
                    requests.refetch();
                    // Approvals change the roster shown elsewhere on the page.
                    on_changed.run(());
                }
                Err(e) => leptos::logging::warn!("join request action failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request_id, action);
    };

    view! {
        <div class="club-page__requests">
            {move || {
                let Some(pending) = state.get().data else {
                    return view! { <LoadingSpinner/> }.into_any();
                };
                if pending.is_empty() {
                    return view! { <p class="club-page__empty">"No pending requests."</p> }
                        .into_any();
                }
                view! {
                    <ul>
                        {pending
                            .into_iter()
                            .map(|request| {
                                let request_id = request.id;
                                view! {
                                    <li class="club-page__request">
                                        <span>{request.user.username}</span>
                                        <button
                                            class="btn btn--primary"
                                            on:click=move |_| act(request_id, RequestAction::Approve)
                                        >
                                            "Approve"
                                        </button>
                                        <button
                                            class="btn"
                                            on:click=move |_| act(request_id, RequestAction::Reject)
                                        >
                                            "Reject"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                .into_any()
            }}
        </div>
    }
}
