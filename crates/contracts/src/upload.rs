use serde::{Deserialize, Serialize};

/// Response of `POST /upload`.
///
/// On success the service assigns one opaque id per stored image; on an
/// application-level failure `success` is false and `message` says why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub content_id: Option<String>,
    #[serde(default)]
    pub style_id: Option<String>,
}

/// Server-assigned id pair, the ticket for a transfer request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageIds {
    pub content_id: String,
    pub style_id: String,
}

impl UploadResponse {
    /// Extract the id pair, turning an application failure (or a malformed
    /// success without ids) into an error message.
    pub fn into_ids(self) -> Result<ImageIds, String> {
        if !self.success {
            return Err(self
                .message
                .unwrap_or_else(|| "Upload rejected by server".to_string()));
        }
        match (self.content_id, self.style_id) {
            (Some(content_id), Some(style_id)) => Ok(ImageIds {
                content_id,
                style_id,
            }),
            _ => Err("Upload response is missing image ids".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_yields_ids() {
        let resp: UploadResponse = serde_json::from_str(
            r#"{"success":true,"content_id":"c-1","style_id":"s-1","message":"ok"}"#,
        )
        .unwrap();
        let ids = resp.into_ids().unwrap();
        assert_eq!(ids.content_id, "c-1");
        assert_eq!(ids.style_id, "s-1");
    }

    #[test]
    fn failure_carries_server_message() {
        let resp: UploadResponse =
            serde_json::from_str(r#"{"success":false,"message":"bad format"}"#).unwrap();
        assert_eq!(resp.into_ids().unwrap_err(), "bad format");
    }

    #[test]
    fn success_without_ids_is_rejected() {
        let resp: UploadResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.into_ids().is_err());
    }
}
