use serde::{Deserialize, Serialize};

/// Response of `GET /health`. The gateway reports `api_status: "Online"` when
/// the compute service answered its own health probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub api_status: String,
    #[serde(default)]
    pub api_device: Option<String>,
}

impl HealthResponse {
    /// Exact-string check, anything but "Online" counts as degraded.
    pub fn is_online(&self) -> bool {
        self.api_status == "Online"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn online_requires_exact_status() {
        let up: HealthResponse =
            serde_json::from_str(r#"{"status":"healthy","api_status":"Online","api_device":"cuda"}"#)
                .unwrap();
        assert!(up.is_online());

        let down: HealthResponse = serde_json::from_str(r#"{"api_status":"Offline"}"#).unwrap();
        assert!(!down.is_online());

        let odd: HealthResponse = serde_json::from_str(r#"{"api_status":"online"}"#).unwrap();
        assert!(!odd.is_online());
    }
}
