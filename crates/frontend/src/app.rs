use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::health;
use crate::layout::AppHeader;
use crate::params::view::ParametersSection;
use crate::shared::theme::ThemeProvider;
use crate::shared::toast::{ToastHost, ToastService};
use crate::state::StudioStore;
use crate::transfer::view::ResultsSection;
use crate::upload::view::UploadSection;

#[component]
pub fn App() -> impl IntoView {
    let studio = StudioStore::new();
    let toasts = ToastService::new();
    provide_context(studio);
    provide_context(toasts);

    // One-shot availability probe at startup; silent when everything is up.
    Effect::new(move |_| {
        spawn_local(async move {
            match health::api::check_health().await {
                Ok(health) if health.is_online() => {
                    log::debug!("service online, device: {:?}", health.api_device);
                }
                Ok(_) => toasts.error("API is offline. Some features may not work."),
                Err(_) => toasts.error("Unable to connect to API"),
            }
        });
    });

    view! {
        <ThemeProvider>
            <AppHeader />
            <main class="page">
                <UploadSection />
                <Show when=move || studio.params_visible.get()>
                    <ParametersSection />
                </Show>
                <Show when=move || studio.results_visible.get()>
                    <ResultsSection />
                </Show>
            </main>
            <ToastHost />
        </ThemeProvider>
    }
}
