use crate::enums::participation_status::ParticipationStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Game record as returned by `GET /api/game/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetail {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    /// Team the viewer joined with, if any
    #[serde(default)]
    pub team_name: Option<String>,
    /// Viewer's participation state; absent for viewers without a team
    #[serde(default)]
    pub status: Option<ParticipationStatus>,
    /// Team member limit, 0 means unlimited
    #[serde(default)]
    pub limit: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl GameDetail {
    pub fn is_running(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now < self.end
    }

    pub fn is_finished(&self, now: DateTime<Utc>) -> bool {
        now >= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_json() -> &'static str {
        r#"{
            "id": 3,
            "title": "Spring CTF",
            "summary": "Warm-up round",
            "content": "",
            "teamName": "null_ptr",
            "status": "Accepted",
            "limit": 4,
            "start": "2024-03-15T08:00:00Z",
            "end": "2024-03-16T08:00:00Z"
        }"#
    }

    #[test]
    fn test_deserialize_camel_case() {
        let game: GameDetail = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(game.id, 3);
        assert_eq!(game.title, "Spring CTF");
        assert_eq!(game.team_name.as_deref(), Some("null_ptr"));
        assert_eq!(game.status, Some(ParticipationStatus::Accepted));
        assert_eq!(game.start, Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_deserialize_without_status() {
        let game: GameDetail = serde_json::from_str(
            r#"{"id": 7, "title": "Finals", "start": "2024-01-01T00:00:00Z", "end": "2024-01-02T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(game.status, None);
        assert_eq!(game.team_name, None);
        assert_eq!(game.limit, 0);
    }

    #[test]
    fn test_running_window() {
        let game: GameDetail = serde_json::from_str(sample_json()).unwrap();
        let before = Utc.with_ymd_and_hms(2024, 3, 14, 0, 0, 0).unwrap();
        let during = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 3, 16, 8, 0, 0).unwrap();

        assert!(!game.is_running(before));
        assert!(game.is_running(during));
        assert!(!game.is_running(after));
        assert!(game.is_finished(after));
    }
}
