mod model;
mod page;
pub mod tab_route_sync;
mod tabs;
mod view_model;

pub use page::GameMonitorPage;
pub use tabs::{EventsTab, SubmissionsTab};
pub use view_model::GameMonitorVm;
