use contracts::transfer::{download_url, TransferRequest};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, replay};
use crate::shared::dom;
use crate::shared::toast::ToastService;
use crate::state::{use_studio, StudioStore, TransferOutcome};

/// Drive one full transfer attempt: request, checkpoint replay, outcome.
///
/// The start button stays disabled for as long as the phase is busy; every
/// path below ends in a terminal phase, so it always comes back.
pub fn launch(studio: StudioStore, toasts: ToastService) {
    if studio.phase.get_untracked().is_busy() {
        return;
    }
    let Some(ids) = studio.ids.get_untracked() else {
        toasts.error("Upload images before starting a transfer");
        return;
    };

    let request = TransferRequest::new(ids, studio.params.get_untracked());
    let total_steps = request.params.steps;

    studio.phase.update(|p| *p = p.begin_request());
    studio.results_visible.set(true);
    studio.outcome.set(None);
    studio.progress.set(None);
    dom::scroll_to_id("results-section");

    spawn_local(async move {
        let response = match api::start_transfer(&request).await {
            Ok(response) => response,
            Err(e) => {
                studio.phase.update(|p| *p = p.fail());
                toasts.error(e);
                return;
            }
        };

        if !response.success {
            studio.phase.update(|p| *p = p.fail());
            toasts.error(
                response
                    .message
                    .unwrap_or_else(|| "Style transfer failed".to_string()),
            );
            return;
        }

        let (Some(preview_url), Some(result_id)) = (response.preview, response.result_id) else {
            studio.phase.update(|p| *p = p.fail());
            toasts.error("Transfer response is missing the result");
            return;
        };

        // The service hands us the whole checkpoint list at once; replay it
        // at a fixed cadence so the bar moves step by step.
        studio.phase.update(|p| *p = p.begin_replay());
        for (index, checkpoint) in response.progress.iter().enumerate() {
            if index > 0 {
                TimeoutFuture::new(replay::REPLAY_INTERVAL_MS).await;
            }
            studio.progress.set(Some((checkpoint.step, total_steps)));
        }

        let final_loss = response.progress.last().and_then(|cp| cp.total_loss);
        studio.outcome.set(Some(TransferOutcome {
            preview_url,
            result_id,
            final_loss,
        }));
        studio.phase.update(|p| *p = p.complete());
        toasts.success("Style transfer completed!");
    });
}

#[component]
fn ProcessingIndicator() -> impl IntoView {
    let studio = use_studio();

    let width = move || {
        let pct = studio
            .progress
            .get()
            .map(|(step, total)| replay::percent(step, total))
            .unwrap_or(0.0);
        format!("{pct}%")
    };
    let label = move || {
        studio
            .progress
            .get()
            .map(|(step, total)| replay::step_label(step, total))
            .unwrap_or_else(|| "Waiting for the server…".to_string())
    };

    view! {
        <div class="processing-indicator">
            <p class="processing-indicator__caption">"Transferring style…"</p>
            <div class="progress-track">
                <div class="progress-bar" style:width=width></div>
            </div>
            <span class="progress-text">{label}</span>
        </div>
    }
}

#[component]
fn ResultGallery() -> impl IntoView {
    let studio = use_studio();

    view! {
        {move || {
            studio.outcome.get().map(|outcome| {
                let download = download_url(&outcome.result_id);
                view! {
                    <div class="result-container">
                        <div class="result-grid">
                            <figure class="result-card">
                                <img
                                    alt="Content image"
                                    src=studio.content_preview.get().unwrap_or_default()
                                />
                                <figcaption>"Content"</figcaption>
                            </figure>
                            <figure class="result-card">
                                <img
                                    alt="Style image"
                                    src=studio.style_preview.get().unwrap_or_default()
                                />
                                <figcaption>"Style"</figcaption>
                            </figure>
                            <figure class="result-card result-card--stylized">
                                <img alt="Stylized result" src=outcome.preview_url.clone() />
                                <figcaption>"Result"</figcaption>
                            </figure>
                        </div>
                        {outcome.final_loss.map(|loss| {
                            view! {
                                <p class="result-loss">{format!("Final loss: {loss:.2}")}</p>
                            }
                        })}
                        <a class="button button--primary" href=download download="">
                            "Download result"
                        </a>
                    </div>
                }
            })
        }}
    }
}

/// Progress while a run is in flight, gallery and download link afterwards,
/// plus the two reset actions.
#[component]
pub fn ResultsSection() -> impl IntoView {
    let studio = use_studio();

    let on_retry = move |_| {
        studio.reset_for_retry();
        dom::scroll_to_id("parameters-section");
    };
    let on_new_images = move |_| {
        studio.reset_for_new_images();
        dom::scroll_to_top();
    };

    view! {
        <section class="results-section" id="results-section">
            <h2 class="section-title">"3. Results"</h2>

            <Show when=move || studio.phase.get().is_busy()>
                <ProcessingIndicator />
            </Show>

            <ResultGallery />

            <Show when=move || !studio.phase.get().is_busy()>
                <div class="section-actions">
                    <button class="button button--secondary" on:click=on_retry>
                        "Retry with different parameters"
                    </button>
                    <button class="button button--secondary" on:click=on_new_images>
                        "Try new images"
                    </button>
                </div>
            </Show>
        </section>
    }
}
