//! Clubs listing with join actions and a create-club dialog.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::club_card::ClubCard;
use crate::components::error_display::ErrorDisplay;
use crate::components::layout::AppLayout;
use crate::components::loading::LoadingSpinner;
use crate::net::api::fetch_clubs;
use crate::state::auth::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::use_api::use_api;

#[component]
pub fn ClubsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let clubs = use_api(fetch_clubs);
    let state = clubs.state;
    let retry = Callback::new(move |()| clubs.refetch());

    // Backend detail line from the last join action ("Joined club." or
    // "Join request submitted for approval.").
    let notice = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);

    let on_join = Callback::new(move |club_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::join_club(club_id).await {
                Ok(detail) => {
                    notice.set(detail);
                    clubs.refetch();
                }
                Err(e) => notice.set(e.user_message()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = club_id;
    });

    let on_cancel = Callback::new(move |_| show_create.set(false));
    let on_created = Callback::new(move |_| {
        show_create.set(false);
        clubs.refetch();
    });

    view! {
        <AppLayout>
            <div class="clubs-page">
                <header class="clubs-page__header">
                    <h1>"Clubs"</h1>
                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                        "+ New Club"
                    </button>
                </header>
                <Show when=move || !notice.get().is_empty()>
                    <p class="clubs-page__notice">{move || notice.get()}</p>
                </Show>
                {move || {
                    state.get().error.map(|message| view! {
                        <ErrorDisplay message=message on_retry=retry/>
                    })
                }}
                {move || {
                    let Some(clubs) = state.get().data else {
                        return view! { <LoadingSpinner label="Loading clubs..."/> }.into_any();
                    };
                    if clubs.is_empty() {
                        return view! {
                            <p class="clubs-page__empty">"No clubs yet. Create the first one."</p>
                        }
                        .into_any();
                    }
                    view! {
                        <div class="clubs-page__grid">
                            {clubs
                                .into_iter()
                                .map(|club| {
                                    view! { <ClubCard club=club on_join=on_join/> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }}
                <Show when=move || show_create.get()>
                    <CreateClubDialog on_cancel=on_cancel on_created=on_created/>
                </Show>
            </div>
        </AppLayout>
    }
}

/// Modal dialog for creating a new club.
#[component]
fn CreateClubDialog(on_cancel: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let name_value = name.get_untracked().trim().to_owned();
        let description_value = description.get_untracked().trim().to_owned();
        if name_value.is_empty() {
            error.set("Enter a club name.".to_owned());
            return;
        }
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_club(&name_value, &description_value).await {
                Ok(_) => on_created.run(()),
                Err(e) => {
                    error.set(e.user_message());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (name_value, description_value);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Club"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
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
