use super::super::view_model::GameMonitorVm;
use crate::shared::date_utils::format_datetime;
use leptos::prelude::*;

#[component]
pub fn SubmissionsTab() -> impl IntoView {
    let vm = use_context::<GameMonitorVm>().expect("GameMonitorVm not found");
    let game = vm.game;
    let submissions = vm.submissions;

    Effect::new({
        let vm = vm.clone();
        move || {
            if vm.game_id.get().is_some() {
                vm.load_submissions();
            }
        }
    });

    let team = move || {
        game.with(|g| {
            g.as_ref().map(|g| {
                let status = g.status.map(|s| s.display_name()).unwrap_or("No team");
                match &g.team_name {
                    Some(name) => format!("{} · {}", name, status),
                    None => status.to_string(),
                }
            })
        })
    };

    view! {
        <div class="monitor__panel">
            <h3>"Submissions"</h3>
            <p class="monitor__meta">{team}</p>
            <table class="monitor__table">
                <tbody>
                    <For
                        each=move || submissions.get()
                        key=|s| (s.time, s.answer.clone(), s.team.clone())
                        children=|s| {
                            view! {
                                <tr>
                                    <td>{format_datetime(&s.time)}</td>
                                    <td>{s.team.clone().unwrap_or_default()}</td>
                                    <td>{s.challenge.clone().unwrap_or_default()}</td>
                                    <td>{s.answer.clone()}</td>
                                    <td>{s.status.clone()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
