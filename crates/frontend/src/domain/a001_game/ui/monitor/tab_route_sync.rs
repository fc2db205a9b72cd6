//! Active tab <-> URL synchronization for the game monitor
//!
//! The router path is the only source of truth. `TabRouteSync` keeps the
//! active tab as a projection of the path and turns tab clicks and unknown
//! paths into navigation requests; it never sets the active tab on its own.

/// Static description of one monitor tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDescriptor {
    /// Route suffix, also used as the tab value
    pub id: &'static str,
    pub label: &'static str,
    /// Icon name understood by `shared::icons::icon`
    pub icon: &'static str,
}

pub const MONITOR_TABS: [TabDescriptor; 2] = [
    TabDescriptor {
        id: "events",
        label: "Events",
        icon: "lightning-bolt",
    },
    TabDescriptor {
        id: "submissions",
        label: "Submissions",
        icon: "flag",
    },
];

/// First descriptor whose id is a suffix of `path`, in declaration order
pub fn resolve<'a>(tabs: &'a [TabDescriptor], path: &str) -> Option<&'a TabDescriptor> {
    tabs.iter().find(|tab| path.ends_with(tab.id))
}

/// Route prefix shared by all monitor tabs of a game
pub fn monitor_base(game_id: i32) -> String {
    format!("/games/{}/monitor/", game_id)
}

/// Numeric game id from the `:id` route segment.
///
/// Reads the leading integer and ignores anything after it (`"3abc"` is 3).
/// Missing, non-numeric or out-of-range input gives `-1`.
pub fn parse_game_id(raw: Option<&str>) -> i32 {
    let Some(s) = raw.map(str::trim_start) else {
        return -1;
    };
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    s[..sign_len + digits].parse::<i32>().unwrap_or(-1)
}

/// The overlay covers the content while anything is loading or the game
/// record has not arrived yet.
pub fn overlay_visible(is_loading: bool, has_record: bool) -> bool {
    is_loading || !has_record
}

#[derive(Debug, Clone)]
pub struct TabRouteSync {
    tabs: &'static [TabDescriptor],
    base: String,
    active: &'static str,
}

impl TabRouteSync {
    /// Panics if `tabs` is empty.
    pub fn new(tabs: &'static [TabDescriptor], base: String, initial_path: &str) -> Self {
        let default = tabs.first().expect("monitor needs at least one tab");
        let active = resolve(tabs, initial_path).unwrap_or(default).id;
        Self { tabs, base, active }
    }

    pub fn tabs(&self) -> &'static [TabDescriptor] {
        self.tabs
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Switch to another game's prefix; the active tab is kept until the
    /// next path event.
    pub fn rebase(&mut self, base: String) {
        self.base = base;
    }

    pub fn default_tab(&self) -> &'static TabDescriptor {
        &self.tabs[0]
    }

    pub fn path_for(&self, id: &str) -> String {
        format!("{}{}", self.base, id)
    }

    /// Re-derive the active tab from `path`.
    ///
    /// Returns the redirect target when the path names no known tab; in that
    /// case the active tab is left as it was.
    pub fn on_path_changed(&mut self, path: &str) -> Option<String> {
        match resolve(self.tabs, path) {
            Some(tab) => {
                self.active = tab.id;
                None
            }
            None => Some(self.path_for(self.default_tab().id)),
        }
    }

    /// Navigation target for a tab click, `None` for an id outside the tab set.
    pub fn on_tab_selected(&self, id: &str) -> Option<String> {
        self.tabs
            .iter()
            .any(|tab| tab.id == id)
            .then(|| self.path_for(id))
    }
}
