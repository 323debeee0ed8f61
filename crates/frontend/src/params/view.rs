use contracts::params::Preset;
use leptos::prelude::*;

use super::sliders::{SliderSpec, LAYER_SLIDERS, MAIN_SLIDERS};
use crate::shared::format::format_param;
use crate::state::use_studio;
use crate::transfer;

/// One range control with its live value label.
#[component]
fn ParamSlider(spec: &'static SliderSpec) -> impl IntoView {
    let studio = use_studio();
    let value = move || studio.params.with(|p| (spec.read)(p));

    let on_input = move |ev: web_sys::Event| {
        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
            let mut params = studio.params.get_untracked();
            (spec.write)(&mut params, v);
            studio.touch_params(params);
        }
    };

    view! {
        <div class="slider-row">
            <label class="slider-row__label" for=spec.id>{spec.label}</label>
            <input
                id=spec.id
                type="range"
                min=spec.min
                max=spec.max
                step=spec.step
                prop:value=move || value().to_string()
                on:input=on_input
            />
            <span class="slider-row__value">
                {move || format_param(value(), spec.fractional)}
            </span>
        </div>
    }
}

#[component]
fn PresetButton(preset: Preset) -> impl IntoView {
    let studio = use_studio();
    let is_active = move || studio.active_preset.get() == Some(preset);

    view! {
        <button
            class=move || {
                if is_active() {
                    "preset-button preset-button--active"
                } else {
                    "preset-button"
                }
            }
            on:click=move |_| studio.apply_preset(preset)
        >
            {preset.label()}
        </button>
    }
}

/// Sliders, presets and the transfer trigger. Revealed once an upload has
/// succeeded.
#[component]
pub fn ParametersSection() -> impl IntoView {
    let studio = use_studio();
    let toasts = crate::shared::toast::use_toasts();

    view! {
        <section class="parameters-section" id="parameters-section">
            <h2 class="section-title">"2. Tune the transfer"</h2>

            <div class="preset-row">
                {Preset::all()
                    .into_iter()
                    .map(|preset| view! { <PresetButton preset=preset /> })
                    .collect_view()}
            </div>

            <div class="slider-group">
                <h3 class="slider-group__title">"Weights and optimization"</h3>
                {MAIN_SLIDERS
                    .iter()
                    .map(|spec| view! { <ParamSlider spec=spec /> })
                    .collect_view()}
            </div>

            <div class="slider-group">
                <h3 class="slider-group__title">"Style layer weights"</h3>
                {LAYER_SLIDERS
                    .iter()
                    .map(|spec| view! { <ParamSlider spec=spec /> })
                    .collect_view()}
            </div>

            <div class="section-actions">
                <button
                    class="button button--primary"
                    disabled=move || studio.phase.get().is_busy()
                    on:click=move |_| transfer::view::launch(studio, toasts)
                >
                    {move || {
                        if studio.phase.get().is_busy() {
                            "Working…"
                        } else {
                            "Start style transfer"
                        }
                    }}
                </button>
            </div>
        </section>
    }
}
