//! API layer for the game monitor

use crate::shared::api_utils::api_base;
use contracts::domain::a001_game::aggregate::GameDetail;
use contracts::domain::a001_game::monitor::{GameEvent, Submission};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;

    if response.status() != 200 {
        return Err(format!("Server error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse: {}", e))
}

pub async fn fetch_game(id: i32) -> Result<GameDetail, String> {
    fetch_json(&format!("{}/api/game/{}", api_base(), id)).await
}

pub async fn fetch_events(id: i32) -> Result<Vec<GameEvent>, String> {
    fetch_json(&format!("{}/api/game/{}/events", api_base(), id)).await
}

pub async fn fetch_submissions(id: i32) -> Result<Vec<Submission>, String> {
    fetch_json(&format!("{}/api/game/{}/submissions", api_base(), id)).await
}
