use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entry of `GET /api/game/{id}/events`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub values: Vec<String>,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

/// Entry of `GET /api/game/{id}/submissions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub answer: String,
    pub status: String,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub challenge: Option<String>,
}
