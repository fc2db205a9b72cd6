//! ViewModel for the game monitor

use super::model::{fetch_events, fetch_game, fetch_submissions};
use super::tab_route_sync::{monitor_base, overlay_visible, TabDescriptor, TabRouteSync};
use contracts::domain::a001_game::aggregate::GameDetail;
use contracts::domain::a001_game::monitor::{GameEvent, Submission};
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone)]
pub struct GameMonitorVm {
    pub game_id: RwSignal<Option<i32>>,
    pub game: RwSignal<Option<GameDetail>>,
    pub loading: RwSignal<bool>,

    pub events: RwSignal<Vec<GameEvent>>,
    pub submissions: RwSignal<Vec<Submission>>,
    /// Requests in flight for the page shown in the monitor outlet
    content_pending: RwSignal<u32>,

    pub active_tab: RwSignal<&'static str>,
    sync: StoredValue<TabRouteSync>,
}

impl GameMonitorVm {
    pub fn new(tabs: &'static [TabDescriptor], game_id: i32, initial_path: &str) -> Self {
        let sync = TabRouteSync::new(tabs, monitor_base(game_id), initial_path);
        Self {
            game_id: RwSignal::new(None),
            game: RwSignal::new(None),
            loading: RwSignal::new(false),

            events: RwSignal::new(Vec::new()),
            submissions: RwSignal::new(Vec::new()),
            content_pending: RwSignal::new(0),

            active_tab: RwSignal::new(sync.active()),
            sync: StoredValue::new(sync),
        }
    }

    pub fn tabs(&self) -> &'static [TabDescriptor] {
        self.sync.with_value(|sync| sync.tabs())
    }

    pub fn content_loading(&self) -> Signal<bool> {
        let pending = self.content_pending;
        Signal::derive(move || pending.get() > 0)
    }

    /// Overlay over the outlet: the page's own loading flag or a missing game record
    pub fn overlay_visible(&self) -> Signal<bool> {
        let content_loading = self.content_loading();
        let game = self.game;
        Signal::derive(move || overlay_visible(content_loading.get(), game.with(|g| g.is_some())))
    }

    pub fn title(&self) -> Signal<String> {
        let game = self.game;
        Signal::derive(move || {
            game.with(|g| g.as_ref().map(|g| g.title.clone()))
                .unwrap_or_default()
        })
    }

    fn rebase(&self, game_id: i32) {
        let base = monitor_base(game_id);
        self.sync.update_value(|sync| {
            if sync.base() != base {
                sync.rebase(base);
            }
        });
    }

    /// Feed a router change; returns where to redirect when the path names no
    /// tab. The prefix comes from `game_id` as read at the same moment as
    /// `path`, never from an earlier route.
    pub fn on_route_changed(&self, game_id: i32, path: &str) -> Option<String> {
        self.rebase(game_id);
        let mut redirect = None;
        self.sync.update_value(|sync| redirect = sync.on_path_changed(path));
        match &redirect {
            Some(target) => {
                log::debug!("monitor: unknown tab in '{}', redirecting to '{}'", path, target)
            }
            None => {
                let active = self.sync.with_value(|sync| sync.active());
                if self.active_tab.get_untracked() != active {
                    self.active_tab.set(active);
                }
            }
        }
        redirect
    }

    /// Navigation target for a tab click.
    pub fn select_tab(&self, game_id: i32, id: &str) -> Option<String> {
        self.rebase(game_id);
        let target = self.sync.with_value(|sync| sync.on_tab_selected(id));
        if target.is_none() {
            log::warn!("monitor: ignoring selection of unknown tab '{}'", id);
        }
        target
    }

    /// Fetch the game once per distinct id. No periodic refresh.
    pub fn load(&self, id: i32) {
        if self.game_id.get_untracked() == Some(id) {
            return;
        }
        self.rebase(id);

        let vm = self.clone();
        vm.game_id.set(Some(id));
        vm.game.set(None);
        vm.loading.set(true);

        spawn_local(async move {
            let result = fetch_game(id).await;
            vm.finish_game(id, result);
        });
    }

    fn finish_game(&self, id: i32, result: Result<GameDetail, String>) {
        // a newer id may have been requested while this one was in flight
        if self.game_id.get_untracked() != Some(id) {
            return;
        }
        match result {
            Ok(data) => self.game.set(Some(data)),
            Err(e) => log::warn!("monitor: failed to load game {}: {}", id, e),
        }
        self.loading.set(false);
    }

    pub fn load_events(&self) {
        self.load_content(self.events, fetch_events);
    }

    pub fn load_submissions(&self) {
        self.load_content(self.submissions, fetch_submissions);
    }

    fn load_content<T, F, Fut>(&self, target: RwSignal<Vec<T>>, fetch: F)
    where
        T: Send + Sync + 'static,
        F: FnOnce(i32) -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, String>> + 'static,
    {
        let Some(id) = self.game_id.get_untracked() else {
            return;
        };
        self.content_pending.update(|n| *n += 1);

        let vm = self.clone();
        spawn_local(async move {
            let result = fetch(id).await;
            vm.finish_content(id, target, result);
        });
    }

    fn finish_content<T>(
        &self,
        id: i32,
        target: RwSignal<Vec<T>>,
        result: Result<Vec<T>, String>,
    ) where
        T: Send + Sync + 'static,
    {
        self.content_pending.update(|n| *n = n.saturating_sub(1));
        if self.game_id.get_untracked() != Some(id) {
            return;
        }
        match result {
            Ok(items) => target.set(items),
            Err(e) => log::warn!("monitor: failed to load page data for game {}: {}", id, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tab_route_sync::MONITOR_TABS;
    use super::*;
    use chrono::{TimeZone, Utc};
    use leptos::reactive::owner::Owner;

    fn game(id: i32) -> GameDetail {
        GameDetail {
            id,
            title: format!("Game {}", id),
            summary: String::new(),
            content: String::new(),
            team_name: None,
            status: None,
            limit: 0,
            start: Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 3, 16, 8, 0, 0).unwrap(),
        }
    }

    fn vm_at(game_id: i32, path: &str) -> GameMonitorVm {
        let vm = GameMonitorVm::new(&MONITOR_TABS, game_id, path);
        vm.game_id.set(Some(game_id));
        vm
    }

    #[test]
    fn test_route_change_mirrors_active_tab() {
        let owner = Owner::new();
        owner.set();

        let vm = vm_at(3, "/games/3/monitor/events");
        assert_eq!(vm.active_tab.get_untracked(), "events");

        assert_eq!(vm.on_route_changed(3, "/games/3/monitor/submissions"), None);
        assert_eq!(vm.active_tab.get_untracked(), "submissions");

        let redirect = vm.on_route_changed(3, "/games/3/monitor/unknown");
        assert_eq!(redirect.as_deref(), Some("/games/3/monitor/events"));
        assert_eq!(vm.active_tab.get_untracked(), "submissions");
    }

    #[test]
    fn test_unknown_suffix_after_game_switch_uses_new_id() {
        let owner = Owner::new();
        owner.set();

        let vm = vm_at(3, "/games/3/monitor/events");
        // the game fetch for id 4 has not started yet
        let redirect = vm.on_route_changed(4, "/games/4/monitor/bogus");
        assert_eq!(redirect.as_deref(), Some("/games/4/monitor/events"));
        assert_eq!(
            vm.select_tab(4, "submissions").as_deref(),
            Some("/games/4/monitor/submissions")
        );
    }

    #[test]
    fn test_select_tab_does_not_move_active() {
        let owner = Owner::new();
        owner.set();

        let vm = vm_at(3, "/games/3/monitor/events");
        assert_eq!(
            vm.select_tab(3, "submissions").as_deref(),
            Some("/games/3/monitor/submissions")
        );
        assert_eq!(vm.select_tab(3, "scoreboard"), None);
        assert_eq!(vm.active_tab.get_untracked(), "events");
    }

    #[test]
    fn test_stale_game_result_is_dropped() {
        let owner = Owner::new();
        owner.set();

        let vm = vm_at(4, "/games/4/monitor/events");
        vm.loading.set(true);
        vm.finish_game(3, Ok(game(3)));
        assert_eq!(vm.game.get_untracked(), None);
        assert!(vm.loading.get_untracked());

        vm.finish_game(4, Ok(game(4)));
        assert_eq!(vm.game.get_untracked().map(|g| g.id), Some(4));
        assert!(!vm.loading.get_untracked());
    }

    #[test]
    fn test_overlay_follows_content_loading_and_record() {
        let owner = Owner::new();
        owner.set();

        let vm = vm_at(3, "/games/3/monitor/events");
        let overlay = vm.overlay_visible();
        // no record yet
        assert!(overlay.get_untracked());

        vm.finish_game(3, Ok(game(3)));
        assert!(!overlay.get_untracked());

        vm.content_pending.set(1);
        assert!(vm.content_loading().get_untracked());
        assert!(overlay.get_untracked());

        vm.finish_content(3, vm.events, Ok(Vec::new()));
        assert!(!overlay.get_untracked());
    }

    #[test]
    fn test_stale_content_clears_pending_without_writing() {
        let owner = Owner::new();
        owner.set();

        let vm = vm_at(4, "/games/4/monitor/submissions");
        let stale = Submission {
            answer: "flag{old}".to_string(),
            status: "Accepted".to_string(),
            time: Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap(),
            user: None,
            team: None,
            challenge: None,
        };
        vm.content_pending.set(1);
        vm.finish_content(3, vm.submissions, Ok(vec![stale]));
        assert!(vm.submissions.get_untracked().is_empty());
        assert!(!vm.content_loading().get_untracked());
    }
}
