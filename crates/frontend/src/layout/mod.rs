use leptos::prelude::*;

use crate::shared::theme::ThemeToggle;

#[component]
pub fn AppHeader() -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header__titles">
                <h1 class="app-header__title">"Neural Style Transfer Studio"</h1>
                <p class="app-header__tagline">
                    "Blend the content of one image with the style of another"
                </p>
            </div>
            <ThemeToggle />
        </header>
    }
}
