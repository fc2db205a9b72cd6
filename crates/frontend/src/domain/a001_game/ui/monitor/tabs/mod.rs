//! Content pages rendered inside the monitor outlet

mod events;
mod submissions;

pub use events::EventsTab;
pub use submissions::SubmissionsTab;
