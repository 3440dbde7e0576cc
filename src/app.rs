//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    auth_callback::AuthCallbackPage, chat::ChatPage, club::ClubPage, clubs::ClubsPage,
    dashboard::DashboardPage, events::EventsPage, landing::LandingPage, login::LoginPage,
};
use crate::state::auth::SessionState;

/// Root application component.
///
/// Provides the shared session context, kicks off the startup token
/// check, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    crate::state::auth::initialize(session);
    #[cfg(not(feature = "hydrate"))]
    session.update(|s| s.loading = false);

    view! {
        <Stylesheet id="leptos" href="/pkg/venti-client.css"/>
        <Title text="Venti"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("callback"))
                    view=AuthCallbackPage
                />
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("clubs") view=ClubsPage/>
                <Route path=(StaticSegment("clubs"), ParamSegment("id")) view=ClubPage/>
                <Route path=StaticSegment("events") view=EventsPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
            </Routes>
        </Router>
    }
}
