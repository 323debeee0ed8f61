use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use super::api;
use crate::shared::dom;
use crate::shared::toast::use_toasts;
use crate::state::{use_studio, StudioStore};

/// The two picker slots. Everything about a slot is derived from this enum so
/// both sides stay symmetric.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    Content,
    Style,
}

impl Slot {
    fn title(self) -> &'static str {
        match self {
            Slot::Content => "Content image",
            Slot::Style => "Style image",
        }
    }

    fn hint(self) -> &'static str {
        match self {
            Slot::Content => "The photo whose subject you want to keep",
            Slot::Style => "The artwork whose look you want to borrow",
        }
    }

    fn input_id(self) -> &'static str {
        match self {
            Slot::Content => "content-input",
            Slot::Style => "style-input",
        }
    }

    fn preview(self, studio: &StudioStore) -> RwSignal<Option<String>> {
        match self {
            Slot::Content => studio.content_preview,
            Slot::Style => studio.style_preview,
        }
    }

    fn select(self, studio: &StudioStore, file: web_sys::File) {
        match self {
            Slot::Content => studio.select_content(file),
            Slot::Style => studio.select_style(file),
        }
    }

    fn remove(self, studio: &StudioStore) {
        match self {
            Slot::Content => studio.remove_content(),
            Slot::Style => studio.remove_style(),
        }
    }
}

/// One upload area: hidden file input, instruction placeholder, local
/// preview with a remove button.
#[component]
fn ImagePicker(slot: Slot) -> impl IntoView {
    let studio = use_studio();
    let preview = slot.preview(&studio);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                slot.select(&studio, file.clone());
                // Local preview only; nothing leaves the browser here.
                dom::read_as_data_url(&file, move |data_url| {
                    preview.set(Some(data_url));
                });
            }
        }
    };

    let handle_remove = move |_| {
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
        slot.remove(&studio);
    };

    view! {
        <div class="upload-area">
            <h3 class="upload-area__title">{slot.title()}</h3>
            <Show
                when=move || preview.get().is_some()
                fallback=move || {
                    view! {
                        <label class="upload-instructions" for=slot.input_id()>
                            <span class="upload-instructions__icon">"🖼"</span>
                            <span>{slot.hint()}</span>
                            <span class="upload-instructions__cta">"Click to choose a file"</span>
                        </label>
                    }
                }
            >
                <div class="upload-preview">
                    <img
                        class="upload-preview__image"
                        alt=slot.title()
                        src=move || preview.get().unwrap_or_default()
                    />
                    <button class="upload-preview__remove" on:click=handle_remove>
                        "✕ Remove"
                    </button>
                </div>
            </Show>
            <input
                id=slot.input_id()
                node_ref=input_ref
                type="file"
                accept="image/png,image/jpeg"
                class="hidden"
                on:change=handle_file_select
            />
        </div>
    }
}

/// Image pair picker plus the upload trigger. The trigger is enabled iff
/// both images are selected, and disabled while the request is in flight.
#[component]
pub fn UploadSection() -> impl IntoView {
    let studio = use_studio();
    let toasts = use_toasts();
    let (uploading, set_uploading) = signal(false);

    let on_upload = move |_| {
        if uploading.get_untracked() {
            return;
        }
        let (Some(content), Some(style)) = (
            studio.content_file.get_untracked(),
            studio.style_file.get_untracked(),
        ) else {
            return;
        };

        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_images(&content, &style)
                .await
                .and_then(|resp| resp.into_ids())
            {
                Ok(ids) => {
                    log::debug!("uploaded images: {}/{}", ids.content_id, ids.style_id);
                    studio.complete_upload(ids);
                    toasts.success("Images uploaded successfully!");
                    dom::scroll_to_id("parameters-section");
                }
                Err(e) => toasts.error(e),
            }
            // re-enable on every path
            set_uploading.set(false);
        });
    };

    view! {
        <section class="upload-section" id="upload-section">
            <h2 class="section-title">"1. Pick your images"</h2>
            <div class="upload-grid">
                <ImagePicker slot=Slot::Content />
                <ImagePicker slot=Slot::Style />
            </div>
            <div class="section-actions">
                <button
                    class="button button--primary"
                    disabled=move || !studio.can_upload() || uploading.get()
                    on:click=on_upload
                >
                    {move || if uploading.get() { "Uploading…" } else { "Upload images" }}
                </button>
            </div>
        </section>
    }
}
