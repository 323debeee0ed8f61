//! Descriptors for the nine parameter sliders.
//!
//! Ranges bracket the preset values; `steps` mirrors the 50..1000 window the
//! service validates on its side.

use contracts::params::ParameterSet;

pub struct SliderSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Fractional-step controls display 3 decimals, the rest none.
    pub fractional: bool,
    pub read: fn(&ParameterSet) -> f64,
    pub write: fn(&mut ParameterSet, f64),
}

/// The global knobs shown in the first group.
pub static MAIN_SLIDERS: [SliderSpec; 4] = [
    SliderSpec {
        id: "content-weight",
        label: "Content weight",
        min: 0.1,
        max: 10.0,
        step: 0.1,
        fractional: true,
        read: |p| p.content_weight,
        write: |p, v| p.content_weight = v,
    },
    SliderSpec {
        id: "style-weight",
        label: "Style weight",
        min: 0.1,
        max: 10.0,
        step: 0.1,
        fractional: true,
        read: |p| p.style_weight,
        write: |p, v| p.style_weight = v,
    },
    SliderSpec {
        id: "steps",
        label: "Optimization steps",
        min: 50.0,
        max: 1000.0,
        step: 10.0,
        fractional: false,
        read: |p| p.steps as f64,
        write: |p, v| p.steps = v as u32,
    },
    SliderSpec {
        id: "learning-rate",
        label: "Learning rate",
        min: 0.001,
        max: 0.01,
        step: 0.001,
        fractional: true,
        read: |p| p.learning_rate,
        write: |p, v| p.learning_rate = v,
    },
];

/// Per-layer style weights, conv1_1 through conv5_1.
pub static LAYER_SLIDERS: [SliderSpec; 5] = [
    SliderSpec {
        id: "conv1-1-weight",
        label: "Conv1_1 weight",
        min: 0.0,
        max: 2.0,
        step: 0.1,
        fractional: true,
        read: |p| p.conv1_1_weight,
        write: |p, v| p.conv1_1_weight = v,
    },
    SliderSpec {
        id: "conv2-1-weight",
        label: "Conv2_1 weight",
        min: 0.0,
        max: 2.0,
        step: 0.1,
        fractional: true,
        read: |p| p.conv2_1_weight,
        write: |p, v| p.conv2_1_weight = v,
    },
    SliderSpec {
        id: "conv3-1-weight",
        label: "Conv3_1 weight",
        min: 0.0,
        max: 2.0,
        step: 0.1,
        fractional: true,
        read: |p| p.conv3_1_weight,
        write: |p, v| p.conv3_1_weight = v,
    },
    SliderSpec {
        id: "conv4-1-weight",
        label: "Conv4_1 weight",
        min: 0.0,
        max: 2.0,
        step: 0.1,
        fractional: true,
        read: |p| p.conv4_1_weight,
        write: |p, v| p.conv4_1_weight = v,
    },
    SliderSpec {
        id: "conv5-1-weight",
        label: "Conv5_1 weight",
        min: 0.0,
        max: 2.0,
        step: 0.1,
        fractional: true,
        read: |p| p.conv5_1_weight,
        write: |p, v| p.conv5_1_weight = v,
    },
];

pub fn all_sliders() -> impl Iterator<Item = &'static SliderSpec> {
    MAIN_SLIDERS.iter().chain(LAYER_SLIDERS.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::params::Preset;

    #[test]
    fn every_preset_value_fits_its_slider_range() {
        for preset in Preset::all() {
            let params = preset.values();
            for spec in all_sliders() {
                let v = (spec.read)(&params);
                assert!(
                    v >= spec.min && v <= spec.max,
                    "{} = {v} out of range for preset {}",
                    spec.id,
                    preset.slug()
                );
            }
        }
    }

    #[test]
    fn fractional_flag_matches_step() {
        for spec in all_sliders() {
            assert_eq!(
                spec.fractional,
                spec.step.fract() != 0.0,
                "fractional flag mismatch on {}",
                spec.id
            );
        }
    }

    #[test]
    fn read_write_round_trip() {
        let mut params = ParameterSet::default();
        for spec in all_sliders() {
            (spec.write)(&mut params, spec.max);
            assert_eq!((spec.read)(&params), spec.max, "round trip on {}", spec.id);
        }
    }

    #[test]
    fn slider_ids_are_unique() {
        let ids: Vec<_> = all_sliders().map(|s| s.id).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }
}
