use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::core::catalog::SharedCatalog;
use crate::data::{load_catalog, DataLayout, DataSource, LoadError};
use crate::gallery::{DetailView, GalleryGrid};
use crate::t;

/// Main page: loads the catalog once, then switches between the gallery and
/// the detail of the selected visualization.
#[component]
pub fn Viewer() -> Element {
    let source = use_context::<DataSource>();
    let layout = try_use_context::<DataLayout>().unwrap_or_default();

    let catalog = use_resource(move || {
        let source = source.clone();
        let layout = layout.clone();
        async move { load_catalog(&source, &layout).await.map(SharedCatalog::new) }
    });

    let selected = use_signal(|| Option::<String>::None);
    let mut reported = use_signal(|| false);

    use_effect(move || {
        if let Some(Err(err)) = &*catalog.read() {
            if !*reported.peek() {
                reported.set(true);
                report_load_failure(err);
            }
        }
    });

    let content = match &*catalog.read() {
        None => rsx! {
            p { class: "viewer__placeholder", {t!("viewer-loading")} }
        },
        Some(Err(_)) => rsx! {
            p { class: "viewer__placeholder viewer__placeholder--error", {t!("viewer-load-failed")} }
        },
        Some(Ok(data)) => render_catalog(data.clone(), selected),
    };

    rsx! {
        section { class: "page page-viewer", {content} }
    }
}

fn render_catalog(catalog: SharedCatalog, mut selected: Signal<Option<String>>) -> Element {
    let current = selected();

    let open = {
        let catalog = catalog.clone();
        move |id: String| {
            // Unknown identifiers are ignored.
            if catalog.visualization(&id).is_some() {
                selected.set(Some(id));
                scroll_window_to_top();
            }
        }
    };

    rsx! {
        GalleryGrid {
            catalog: catalog.clone(),
            hidden: current.is_some(),
            on_open: open,
        }

        if let Some(id) = current {
            DetailView {
                key: "{id}",
                catalog,
                vis_id: id.clone(),
                on_back: move |_| {
                    selected.set(None);
                    scroll_window_to_top();
                },
            }
        }
    }
}

fn report_load_failure(err: &LoadError) {
    error!("failed to load gallery data ({}): {err}", err.path());
    let message = serde_json::to_string(&t!("viewer-load-alert")).unwrap_or_else(|_| "\"\"".into());
    let _ = document::eval(&format!("window.alert({message});"));
}

fn scroll_window_to_top() {
    let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}
