use crate::domain::a001_game::ui::monitor::{EventsTab, GameMonitorPage, SubmissionsTab};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <div class="page">"Page not found"</div> }>
            <ParentRoute path=path!("/games/:id/monitor") view=GameMonitorPage>
                <Route path=path!("events") view=EventsTab />
                <Route path=path!("submissions") view=SubmissionsTab />
                // Empty and unknown suffixes still mount the monitor, which redirects them
                <Route path=path!("") view=|| () />
                <Route path=path!("*any") view=|| () />
            </ParentRoute>
        </Routes>
    }
}
