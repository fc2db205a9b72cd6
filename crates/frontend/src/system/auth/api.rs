use contracts::system::auth::UserInfo;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Get current user info. The session travels in a same-origin cookie.
pub async fn get_current_user() -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/account/profile"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
