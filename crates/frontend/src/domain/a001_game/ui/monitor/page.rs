//! Game monitor page: role gate, header, vertical tab bar and routed content

use super::tab_route_sync::{parse_game_id, MONITOR_TABS};
use super::view_model::GameMonitorVm;
use crate::shared::components::loading_overlay::LoadingOverlay;
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireRole;
use contracts::enums::participation_status::ParticipationStatus;
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use thaw::*;

#[component]
pub fn GameMonitorPage() -> impl IntoView {
    view! {
        <RequireRole required=Role::Monitor>
            <GameMonitor />
        </RequireRole>
    }
}

#[component]
fn GameMonitor() -> impl IntoView {
    let params = use_params_map();
    let location = use_location();
    let navigate = StoredValue::new_local(use_navigate());

    let game_id = Memo::new(move |_| params.with(|p| parse_game_id(p.get("id").as_deref())));
    let vm = GameMonitorVm::new(
        &MONITOR_TABS,
        game_id.get_untracked(),
        &location.pathname.get_untracked(),
    );
    provide_context(vm.clone());

    Effect::new({
        let vm = vm.clone();
        move || vm.load(game_id.get())
    });

    // Path -> active tab. Unknown suffixes are replaced by the default tab.
    Effect::new({
        let vm = vm.clone();
        move || {
            let id = game_id.get();
            let path = location.pathname.get();
            if let Some(target) = vm.on_route_changed(id, &path) {
                let options = NavigateOptions {
                    replace: true,
                    ..Default::default()
                };
                navigate.with_value(|nav| nav(&target, options));
            }
        }
    });

    // Tab click -> path. The active tab follows once the router reports the new path.
    let on_select = Callback::new({
        let vm = vm.clone();
        move |id: &'static str| {
            if let Some(target) = vm.select_tab(game_id.get_untracked(), id) {
                navigate.with_value(|nav| nav(&target, NavigateOptions::default()));
            }
        }
    });

    let overlay = vm.overlay_visible();

    view! {
        <div class="page page--monitor">
            <Header vm=vm.clone() />

            <div class="page__content">
                <Flex gap=FlexGap::Medium style="align-items: flex-start;">
                    <TabBar vm=vm.clone() on_select=on_select />
                    <div style="width: calc(100% - 9rem); position: relative;">
                        <LoadingOverlay visible=overlay>
                            <Outlet />
                        </LoadingOverlay>
                    </div>
                </Flex>
            </div>
        </div>
    }
}

fn status_color(status: ParticipationStatus) -> BadgeColor {
    match status {
        ParticipationStatus::Accepted => BadgeColor::Success,
        ParticipationStatus::Pending => BadgeColor::Warning,
        ParticipationStatus::Denied | ParticipationStatus::Forfeited => BadgeColor::Danger,
        ParticipationStatus::Unsubmitted => BadgeColor::Informative,
    }
}

#[component]
fn Header(vm: GameMonitorVm) -> impl IntoView {
    let title = vm.title();
    let game = vm.game;

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h2>
                    {move || {
                        let title = title.get();
                        if title.is_empty() { "Loading...".to_string() } else { title }
                    }}
                </h2>
                {move || {
                    game.with(|g| g.as_ref().and_then(|g| g.status))
                        .map(|status| {
                            view! {
                                <Badge appearance=BadgeAppearance::Filled color=status_color(status)>
                                    {status.display_name()}
                                </Badge>
                            }
                        })
                }}
            </div>
        </div>
    }
}

#[component]
fn TabBar(vm: GameMonitorVm, on_select: Callback<&'static str>) -> impl IntoView {
    let active_tab = vm.active_tab;

    view! {
        <Flex
            vertical=true
            gap=FlexGap::Small
            style="width: 8rem; padding: var(--spacing-sm); background: var(--color-bg-secondary); border-radius: var(--radius-lg); border: 1px solid var(--color-border);"
        >
            {vm
                .tabs()
                .iter()
                .map(|tab| {
                    let id = tab.id;
                    view! {
                        <Button
                            appearance=Signal::derive(move || {
                                if active_tab.get() == id {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            })
                            size=ButtonSize::Small
                            on_click=move |_| on_select.run(id)
                        >
                            <span class="tab-icon">{icon(tab.icon)}</span>
                            {tab.label}
                        </Button>
                    }
                })
                .collect_view()}
        </Flex>
    }
}
