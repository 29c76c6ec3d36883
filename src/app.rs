//! Todo Widget App
//!
//! Page shell: applies document metadata and mounts the list.

use leptos::prelude::*;

use crate::components::TodoList;
use crate::config::WidgetConfig;
use crate::context::TodoContext;

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    log::info!("[APP] Mounting todo widget, mode={}", config.mode.as_str());

    apply_metadata(&config);
    provide_context(TodoContext::new(config.mode));

    view! {
        <main class="page">
            <TodoList />
        </main>
    }
}

/// Document title and `<meta name="description">`
fn apply_metadata(config: &WidgetConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("[APP] No document, skipping metadata");
        return;
    };
    document.set_title(&config.title);

    let meta = match document.query_selector("meta[name=\"description\"]") {
        Ok(Some(meta)) => Some(meta),
        _ => create_description_meta(&document),
    };
    if let Some(meta) = meta {
        if let Err(e) = meta.set_attribute("content", &config.description) {
            log::warn!("[APP] Failed to set description: {:?}", e);
        }
    }
}

fn create_description_meta(document: &web_sys::Document) -> Option<web_sys::Element> {
    let meta = document.create_element("meta").ok()?;
    meta.set_attribute("name", "description").ok()?;
    document.head()?.append_child(&meta).ok()?;
    Some(meta)
}
