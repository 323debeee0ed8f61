use serde::{Deserialize, Serialize};

use crate::params::ParameterSet;
use crate::upload::ImageIds;

/// The slider exposes style weight in a human range (0.1..10); the service
/// expects the raw loss multiplier, a factor of 1e6 larger.
pub const STYLE_WEIGHT_WIRE_SCALE: f64 = 1e6;

/// Everything `POST /transfer` needs: the uploaded image pair plus the full
/// parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub content_id: String,
    pub style_id: String,
    pub params: ParameterSet,
}

impl TransferRequest {
    pub fn new(ids: ImageIds, params: ParameterSet) -> Self {
        Self {
            content_id: ids.content_id,
            style_id: ids.style_id,
            params,
        }
    }

    /// Form fields exactly as the service reads them. `style_weight` is
    /// scaled by [`STYLE_WEIGHT_WIRE_SCALE`] here and nowhere else.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let p = &self.params;
        vec![
            ("content_id", self.content_id.clone()),
            ("style_id", self.style_id.clone()),
            ("content_weight", p.content_weight.to_string()),
            (
                "style_weight",
                (p.style_weight * STYLE_WEIGHT_WIRE_SCALE).to_string(),
            ),
            ("steps", p.steps.to_string()),
            ("learning_rate", p.learning_rate.to_string()),
            ("conv1_1_weight", p.conv1_1_weight.to_string()),
            ("conv2_1_weight", p.conv2_1_weight.to_string()),
            ("conv3_1_weight", p.conv3_1_weight.to_string()),
            ("conv4_1_weight", p.conv4_1_weight.to_string()),
            ("conv5_1_weight", p.conv5_1_weight.to_string()),
        ]
    }
}

/// One `{step, losses}` marker of the optimization run. The service returns
/// the whole list after the fact; the client replays it on a timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressCheckpoint {
    pub step: u32,
    #[serde(default)]
    pub total_loss: Option<f64>,
    #[serde(default)]
    pub content_loss: Option<f64>,
    #[serde(default)]
    pub style_loss: Option<f64>,
}

/// Response of `POST /transfer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub progress: Vec<ProgressCheckpoint>,
    /// Data URL of the produced image, for inline preview.
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub result_id: Option<String>,
}

/// Path of the binary download for a finished result. Linked, never fetched,
/// by the frontend.
pub fn download_url(result_id: &str) -> String {
    format!("/download/{result_id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Preset;

    fn request(params: ParameterSet) -> TransferRequest {
        TransferRequest::new(
            ImageIds {
                content_id: "c-9".into(),
                style_id: "s-9".into(),
            },
            params,
        )
    }

    fn field<'a>(fields: &'a [(&'static str, String)], name: &str) -> &'a str {
        &fields
            .iter()
            .find(|(k, _)| *k == name)
            .unwrap_or_else(|| panic!("missing field {name}"))
            .1
    }

    #[test]
    fn style_weight_is_scaled_on_the_wire() {
        let fields = request(Preset::Balanced.values()).form_fields();
        assert_eq!(field(&fields, "style_weight"), "1000000");

        let fields = request(Preset::StyleFocused.values()).form_fields();
        assert_eq!(field(&fields, "style_weight"), "5000000");
    }

    #[test]
    fn other_fields_pass_through_unscaled() {
        let fields = request(Preset::ContentFocused.values()).form_fields();
        assert_eq!(field(&fields, "content_id"), "c-9");
        assert_eq!(field(&fields, "style_id"), "s-9");
        assert_eq!(field(&fields, "content_weight"), "5");
        assert_eq!(field(&fields, "steps"), "300");
        assert_eq!(field(&fields, "learning_rate"), "0.003");
        assert_eq!(field(&fields, "conv2_1_weight"), "0.8");
    }

    #[test]
    fn field_set_matches_service_contract() {
        let fields = request(ParameterSet::default()).form_fields();
        let names: Vec<_> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec![
                "content_id",
                "style_id",
                "content_weight",
                "style_weight",
                "steps",
                "learning_rate",
                "conv1_1_weight",
                "conv2_1_weight",
                "conv3_1_weight",
                "conv4_1_weight",
                "conv5_1_weight",
            ]
        );
    }

    #[test]
    fn progress_losses_are_optional() {
        let resp: TransferResponse = serde_json::from_str(
            r#"{"success":true,"progress":[{"step":30},{"step":300,"total_loss":12.5}],
                "preview":"data:image/jpeg;base64,xyz","result_id":"r-1"}"#,
        )
        .unwrap();
        assert_eq!(resp.progress.len(), 2);
        assert_eq!(resp.progress[0].total_loss, None);
        assert_eq!(resp.progress[1].total_loss, Some(12.5));
    }

    #[test]
    fn download_url_embeds_result_id() {
        assert_eq!(download_url("r-42"), "/download/r-42");
    }
}
