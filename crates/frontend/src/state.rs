//! Application-wide state store, provided via context from `App`.

use contracts::params::{ParameterSet, Preset};
use contracts::upload::ImageIds;
use leptos::prelude::*;

use crate::transfer::phase::TransferPhase;

/// What a finished transfer leaves behind.
#[derive(Clone, PartialEq, Debug)]
pub struct TransferOutcome {
    /// Data URL of the stylized image for inline display.
    pub preview_url: String,
    /// Opaque token for the `/download/{id}` link.
    pub result_id: String,
    /// Final total loss, when the last checkpoint carried one.
    pub final_loss: Option<f64>,
}

/// Single-owner store for everything the page sections share.
///
/// All mutation happens on the main thread between await points, so plain
/// signals are enough; the raw `File` handles are main-thread-only and live
/// in local-storage signals.
#[derive(Clone, Copy)]
pub struct StudioStore {
    pub content_file: RwSignal<Option<web_sys::File>, LocalStorage>,
    pub style_file: RwSignal<Option<web_sys::File>, LocalStorage>,
    pub content_preview: RwSignal<Option<String>>,
    pub style_preview: RwSignal<Option<String>>,
    pub ids: RwSignal<Option<ImageIds>>,
    pub params: RwSignal<ParameterSet>,
    /// Preset whose values the sliders currently hold, if any.
    pub active_preset: RwSignal<Option<Preset>>,
    pub params_visible: RwSignal<bool>,
    pub results_visible: RwSignal<bool>,
    pub phase: RwSignal<TransferPhase>,
    /// `(current_step, total_steps)` while replaying checkpoints.
    pub progress: RwSignal<Option<(u32, u32)>>,
    pub outcome: RwSignal<Option<TransferOutcome>>,
}

impl StudioStore {
    pub fn new() -> Self {
        Self {
            content_file: RwSignal::new_local(None),
            style_file: RwSignal::new_local(None),
            content_preview: RwSignal::new(None),
            style_preview: RwSignal::new(None),
            ids: RwSignal::new(None),
            params: RwSignal::new(ParameterSet::default()),
            active_preset: RwSignal::new(None),
            params_visible: RwSignal::new(false),
            results_visible: RwSignal::new(false),
            phase: RwSignal::new(TransferPhase::Idle),
            progress: RwSignal::new(None),
            outcome: RwSignal::new(None),
        }
    }

    /// Upload is possible exactly when both images are picked.
    pub fn can_upload(&self) -> bool {
        self.content_file.with(|f| f.is_some()) && self.style_file.with(|f| f.is_some())
    }

    pub fn select_content(&self, file: web_sys::File) {
        self.content_file.set(Some(file));
    }

    pub fn select_style(&self, file: web_sys::File) {
        self.style_file.set(Some(file));
    }

    pub fn remove_content(&self) {
        self.content_file.set(None);
        self.content_preview.set(None);
    }

    pub fn remove_style(&self) {
        self.style_file.set(None);
        self.style_preview.set(None);
    }

    /// Store the server-assigned ids and reveal the parameter panel.
    pub fn complete_upload(&self, ids: ImageIds) {
        self.ids.set(Some(ids));
        self.params_visible.set(true);
    }

    /// Overwrite every parameter at once and mark the preset active.
    pub fn apply_preset(&self, preset: Preset) {
        self.params.set(preset.values());
        self.active_preset.set(Some(preset));
    }

    /// A hand-tuned value no longer corresponds to any named preset.
    pub fn touch_params(&self, params: ParameterSet) {
        self.params.set(params);
        self.active_preset.set(None);
    }

    /// Back to the parameter panel; uploads and parameters survive.
    pub fn reset_for_retry(&self) {
        self.results_visible.set(false);
        self.phase.update(|p| *p = p.reset());
        self.progress.set(None);
    }

    /// Full reset to the initial view. Parameter values are deliberately
    /// left alone, matching the "new images" action.
    pub fn reset_for_new_images(&self) {
        self.remove_content();
        self.remove_style();
        self.ids.set(None);
        self.params_visible.set(false);
        self.results_visible.set(false);
        self.phase.update(|p| *p = p.reset());
        self.progress.set(None);
        self.outcome.set(None);
    }
}

impl Default for StudioStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_studio() -> StudioStore {
    use_context::<StudioStore>().expect("StudioStore not found. Provide it from App.")
}
