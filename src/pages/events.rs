//! Events listing with a create-event dialog for club admins.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::error_display::ErrorDisplay;
use crate::components::event_card::EventCard;
use crate::components::layout::AppLayout;
use crate::components::loading::LoadingSpinner;
use crate::net::api::fetch_events;
use crate::state::auth::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::use_api::use_api;

#[component]
pub fn EventsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let events = use_api(fetch_events);
    let state = events.state;
    let retry = Callback::new(move |()| events.refetch());

    let show_create = RwSignal::new(false);
    let on_cancel = Callback::new(move |_| show_create.set(false));
    let on_created = Callback::new(move |_| {
        show_create.set(false);
        events.refetch();
    });

    view! {
        <AppLayout>
            <div class="events-page">
                <header class="events-page__header">
                    <h1>"Events"</h1>
                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                        "+ New Event"
                    </button>
                </header>
                {move || {
                    state.get().error.map(|message| view! {
                        <ErrorDisplay message=message on_retry=retry/>
                    })
                }}
                {move || {
                    let Some(events) = state.get().data else {
                        return view! { <LoadingSpinner label="Loading events..."/> }.into_any();
                    };
                    if events.is_empty() {
                        return view! { <p class="events-page__empty">"No events yet."</p> }
                            .into_any();
                    }
                    view! {
                        <div class="events-page__grid">
                            {events
                                .into_iter()
                                .map(|event| view! { <EventCard event=event/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }}
                <Show when=move || show_create.get()>
                    <CreateEventDialog on_cancel=on_cancel on_created=on_created/>
                </Show>
            </div>
        </AppLayout>
    }
}

/// Modal dialog for scheduling a new event in one of the caller's clubs.
#[component]
fn CreateEventDialog(on_cancel: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let club_id = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Clubs the user administers populate the target select.
    let clubs = use_api(crate::net::api::fetch_clubs);
    let admin_clubs = move || {
        clubs
            .state
            .get()
            .data
            .unwrap_or_default()
            .into_iter()
            .filter(|c| c.is_admin)
            .collect::<Vec<_>>()
    };

    let submit = Callback::new(move |()| {
        let title_value = title.get_untracked().trim().to_owned();
        let description_value = description.get_untracked().trim().to_owned();
        let date_value = date.get_untracked();
        let Ok(club) = club_id.get_untracked().parse::<i64>() else {
            error.set("Pick a club.".to_owned());
            return;
        };
        if title_value.is_empty() || date_value.is_empty() {
            error.set("Enter a title and a date.".to_owned());
            return;
        }
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_event(&title_value, &description_value, &date_value, club)
                .await
            {
                Ok(_) => on_created.run(()),
                Err(e) => {
                    error.set(e.user_message());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (title_value, description_value, date_value, club);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Event"</h2>
                <label class="dialog__label">
                    "Club"
                    <select
                        class="dialog__input"
                        on:change=move |ev| club_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select a club"</option>
                        {move || {
                            admin_clubs()
                                .into_iter()
                                .map(|c| {
                                    view! { <option value=c.id.to_string()>{c.name}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Date"
                    <input
                        class="dialog__input"
                        type="datetime-local"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
