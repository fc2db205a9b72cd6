use serde::{Deserialize, Serialize};

/// Team participation state within a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipationStatus {
    Unsubmitted,
    Pending,
    Accepted,
    Denied,
    Forfeited,
}

impl ParticipationStatus {
    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            ParticipationStatus::Unsubmitted => "Not registered",
            ParticipationStatus::Pending => "Pending review",
            ParticipationStatus::Accepted => "Accepted",
            ParticipationStatus::Denied => "Denied",
            ParticipationStatus::Forfeited => "Forfeited",
        }
    }
}
