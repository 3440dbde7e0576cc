//! Dashboard page: membership stats, recent posts, and upcoming events.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::error_display::ErrorDisplay;
use crate::components::event_card::EventCard;
use crate::components::layout::AppLayout;
use crate::components::loading::LoadingSpinner;
use crate::components::post_card::PostCard;
use crate::components::stat_card::StatCard;
use crate::net::api::fetch_dashboard;
use crate::state::auth::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::use_api::use_api;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let dashboard = use_api(fetch_dashboard);
    let state = dashboard.state;
    let retry = Callback::new(move |()| dashboard.refetch());

    let xp_points = move || {
        session
            .get()
            .user
            .map(|u| u.xp_points.to_string())
            .unwrap_or_else(|| "0".to_owned())
    };

    let body = move || {
        let Some(data) = state.get().data else {
            return view! { <LoadingSpinner label="Loading your dashboard..."/> }.into_any();
        };
        let memberships = data
            .memberships
            .into_iter()
            .map(|m| {
                view! {
                    <li>
                        <a class="dashboard-page__club-link" href=format!("/clubs/{}", m.club_id)>
                            {m.club_name}
                        </a>
                    </li>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <div class="dashboard-page__stats">
                <StatCard label="Clubs on Venti" value=data.clubs_count.to_string()/>
                <StatCard label="Your Memberships" value=memberships.len().to_string()/>
                <StatCard label="Upcoming Events" value=data.upcoming_events.len().to_string()/>
                <StatCard label="XP" value=xp_points()/>
            </div>
            <section class="dashboard-page__section">
                <h2>"Your Clubs"</h2>
                {if memberships.is_empty() {
                    view! {
                        <p class="dashboard-page__empty">"You haven't joined any clubs yet."</p>
                    }
                    .into_any()
                } else {
                    view! { <ul class="dashboard-page__memberships">{memberships}</ul> }.into_any()
                }}
            </section>
            <section class="dashboard-page__section">
                <h2>"Recent Posts"</h2>
                <div class="dashboard-page__posts">
                    {data
                        .recent_posts
                        .into_iter()
                        .map(|post| view! { <PostCard post=post/> })
                        .collect::<Vec<_>>()}
                </div>
            </section>
            <section class="dashboard-page__section">
                <h2>"Upcoming Events"</h2>
                <div class="dashboard-page__events">
                    {data
                        .upcoming_events
                        .into_iter()
                        .map(|event| view! { <EventCard event=event/> })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        }
        .into_any()
    };

    view! {
        <AppLayout>
            <div class="dashboard-page">
                <h1 class="dashboard-page__title">"Dashboard"</h1>
                {move || {
                    state.get().error.map(|message| view! {
                        <ErrorDisplay message=message on_retry=retry/>
                    })
                }}
                {body}
            </div>
        </AppLayout>
    }
}
