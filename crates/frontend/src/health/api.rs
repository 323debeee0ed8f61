use contracts::health::HealthResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// One-shot `GET /health` probe, fired at startup.
pub async fn check_health() -> Result<HealthResponse, String> {
    let response = Request::get(&api_url("/health"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Health check failed: HTTP {}", response.status()));
    }

    response
        .json::<HealthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
