//! Club summary card for the clubs listing.

use leptos::prelude::*;

use crate::net::types::Club;

#[component]
pub fn ClubCard(club: Club, on_join: Callback<i64>) -> impl IntoView {
    let club_id = club.id;
    let is_member = club.is_member || club.is_admin;
    let join_label = if club.requires_request { "Request to Join" } else { "Join" };

    view! {
        <div class="club-card">
            <div class="club-card__header">
                <h3 class="club-card__name">{club.name}</h3>
                {club.is_admin.then(|| view! { <span class="club-card__badge">"Admin"</span> })}
            </div>
            <p class="club-card__description">{club.description}</p>
            <div class="club-card__meta">
                <span class="club-card__admin">{format!("Run by {}", club.admin_username)}</span>
                <span class="club-card__members">{format!("{} members", club.members_count)}</span>
            </div>
            <div class="club-card__actions">
                {if is_member {
                    view! {
                        <a class="btn btn--primary" href=format!("/clubs/{club_id}")>
                            "Open"
                        </a>
                    }
                    .into_any()
                } else {
                    view! {
                        <button class="btn" on:click=move |_| on_join.run(club_id)>
                            {join_label}
                        </button>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
