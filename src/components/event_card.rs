//! Event card used on the dashboard and the events pages.

use leptos::prelude::*;

use crate::net::types::Event;

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    view! {
        <div class="event-card">
            <div class="event-card__header">
                <h3 class="event-card__title">{event.title}</h3>
                <span class="event-card__date">{event.date}</span>
            </div>
            {event.club_name.map(|club| {
                view! { <span class="event-card__club">{club}</span> }
            })}
            <p class="event-card__description">{event.description}</p>
        </div>
    }
}
