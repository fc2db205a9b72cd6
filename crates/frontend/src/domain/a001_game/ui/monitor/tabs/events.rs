use super::super::view_model::GameMonitorVm;
use crate::shared::date_utils::{format_datetime, format_window};
use leptos::prelude::*;

#[component]
pub fn EventsTab() -> impl IntoView {
    let vm = use_context::<GameMonitorVm>().expect("GameMonitorVm not found");
    let game = vm.game;
    let events = vm.events;

    Effect::new({
        let vm = vm.clone();
        move || {
            if vm.game_id.get().is_some() {
                vm.load_events();
            }
        }
    });

    let state = move || {
        game.with(|g| {
            g.as_ref().map(|g| {
                let now = chrono::Utc::now();
                let phase = if g.is_finished(now) {
                    "Finished"
                } else if g.is_running(now) {
                    "Running"
                } else {
                    "Not started"
                };
                format!("{} · {}", phase, format_window(&g.start, &g.end))
            })
        })
    };

    view! {
        <div class="monitor__panel">
            <h3>"Events"</h3>
            <p class="monitor__meta">{state}</p>
            <ul class="monitor__list">
                <For
                    each=move || events.get()
                    key=|event| (event.time, event.kind.clone(), event.values.clone())
                    children=|event| {
                        let who = event.team.clone().or(event.user.clone()).unwrap_or_default();
                        view! {
                            <li>
                                <span class="monitor__time">{format_datetime(&event.time)}</span>
                                " "
                                <strong>{event.kind.clone()}</strong>
                                " "
                                {who}
                                " "
                                {event.values.join(", ")}
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
