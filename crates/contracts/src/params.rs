use serde::{Deserialize, Serialize};

/// Full set of numeric knobs for one style transfer run.
///
/// Every field is bound to a slider in the UI; a preset overwrites the whole
/// struct at once, there is no field-wise merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub content_weight: f64,
    /// UI-range value; multiplied by 1e6 before it goes on the wire, see
    /// [`crate::transfer::TransferRequest::form_fields`].
    pub style_weight: f64,
    pub steps: u32,
    pub learning_rate: f64,
    pub conv1_1_weight: f64,
    pub conv2_1_weight: f64,
    pub conv3_1_weight: f64,
    pub conv4_1_weight: f64,
    pub conv5_1_weight: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Preset::Balanced.values()
    }
}

/// Named parameter bundle, applied atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Balanced,
    ContentFocused,
    StyleFocused,
    FineDetails,
    LargePatterns,
}

impl Preset {
    pub fn all() -> [Preset; 5] {
        [
            Preset::Balanced,
            Preset::ContentFocused,
            Preset::StyleFocused,
            Preset::FineDetails,
            Preset::LargePatterns,
        ]
    }

    /// Stable identifier (also the CSS hook for the preset button).
    pub fn slug(&self) -> &'static str {
        match self {
            Preset::Balanced => "balanced",
            Preset::ContentFocused => "content-focused",
            Preset::StyleFocused => "style-focused",
            Preset::FineDetails => "fine-details",
            Preset::LargePatterns => "large-patterns",
        }
    }

    /// Caption shown on the preset button.
    pub fn label(&self) -> &'static str {
        match self {
            Preset::Balanced => "Balanced",
            Preset::ContentFocused => "Content Focused",
            Preset::StyleFocused => "Style Focused",
            Preset::FineDetails => "Fine Details",
            Preset::LargePatterns => "Large Patterns",
        }
    }

    pub fn values(&self) -> ParameterSet {
        match self {
            Preset::Balanced => ParameterSet {
                content_weight: 1.0,
                style_weight: 1.0,
                steps: 300,
                learning_rate: 0.003,
                conv1_1_weight: 1.0,
                conv2_1_weight: 0.8,
                conv3_1_weight: 0.5,
                conv4_1_weight: 0.3,
                conv5_1_weight: 0.1,
            },
            Preset::ContentFocused => ParameterSet {
                content_weight: 5.0,
                style_weight: 0.5,
                ..Preset::Balanced.values()
            },
            Preset::StyleFocused => ParameterSet {
                content_weight: 0.5,
                style_weight: 5.0,
                steps: 400,
                ..Preset::Balanced.values()
            },
            Preset::FineDetails => ParameterSet {
                conv1_1_weight: 1.5,
                conv2_1_weight: 1.2,
                conv3_1_weight: 0.8,
                conv4_1_weight: 0.5,
                conv5_1_weight: 0.3,
                ..Preset::Balanced.values()
            },
            Preset::LargePatterns => ParameterSet {
                conv1_1_weight: 0.5,
                conv2_1_weight: 0.7,
                conv3_1_weight: 1.0,
                conv4_1_weight: 1.2,
                conv5_1_weight: 1.5,
                ..Preset::Balanced.values()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_balanced() {
        assert_eq!(ParameterSet::default(), Preset::Balanced.values());
    }

    #[test]
    fn preset_values_are_exact() {
        let style = Preset::StyleFocused.values();
        assert_eq!(style.content_weight, 0.5);
        assert_eq!(style.style_weight, 5.0);
        assert_eq!(style.steps, 400);
        assert_eq!(style.learning_rate, 0.003);

        let fine = Preset::FineDetails.values();
        assert_eq!(fine.conv1_1_weight, 1.5);
        assert_eq!(fine.conv5_1_weight, 0.3);
        // layer tweaks leave the global knobs at balanced values
        assert_eq!(fine.content_weight, 1.0);
        assert_eq!(fine.steps, 300);

        let large = Preset::LargePatterns.values();
        assert_eq!(large.conv1_1_weight, 0.5);
        assert_eq!(large.conv5_1_weight, 1.5);
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: Vec<_> = Preset::all().iter().map(|p| p.slug()).collect();
        let mut deduped = slugs.clone();
        deduped.dedup();
        assert_eq!(slugs, deduped);
        assert_eq!(slugs.len(), 5);
    }

    #[test]
    fn preset_serializes_as_kebab_case() {
        let json = serde_json::to_string(&Preset::ContentFocused).unwrap();
        assert_eq!(json, "\"content-focused\"");
    }
}
