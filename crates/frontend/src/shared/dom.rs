//! Thin web-sys helpers shared by the page sections.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Smooth-scroll the element with the given id into view. No-op when the
/// element is not in the document.
pub fn scroll_to_id(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Smooth-scroll the window back to the top of the page.
pub fn scroll_to_top() {
    if let Some(w) = window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Read a file as a data URL and hand the result to `on_done`.
///
/// Purely local: the preview pipeline never touches the network. Errors from
/// the reader are swallowed after a log line; the caller keeps its previous
/// preview in that case.
pub fn read_as_data_url(file: &web_sys::File, on_done: impl Fn(String) + 'static) {
    let reader = match web_sys::FileReader::new() {
        Ok(r) => r,
        Err(_) => {
            log::warn!("FileReader is not available");
            return;
        }
    };

    let reader_for_closure = reader.clone();
    let onload = Closure::wrap(Box::new(move |_event: web_sys::ProgressEvent| {
        if let Ok(result) = reader_for_closure.result() {
            if let Some(data_url) = result.as_string() {
                on_done(data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget(); // keep the closure alive until the reader fires

    if reader.read_as_data_url(file).is_err() {
        log::warn!("failed to start reading {}", file.name());
    }
}
