use dioxus::prelude::*;

use crate::core::catalog::SharedCatalog;
use crate::core::format::vis_label;
use crate::data::DataLayout;
use crate::t;

#[derive(Clone)]
struct Thumb {
    id: String,
    src: Option<String>,
    label: String,
}

/// Thumbnail grid of every visualization the gallery shows. All thumbnails
/// report through the single `on_open` handler.
#[component]
pub fn GalleryGrid(catalog: SharedCatalog, hidden: bool, on_open: EventHandler<String>) -> Element {
    let layout = try_use_context::<DataLayout>().unwrap_or_default();

    let thumbs: Vec<Thumb> = catalog
        .gallery_ids()
        .into_iter()
        .filter_map(|id| catalog.visualization(id))
        .map(|vis| Thumb {
            id: vis.id.clone(),
            src: vis.file_name().map(|name| layout.image_src(name)),
            label: vis_label(&vis.id),
        })
        .collect();
    let count = thumbs.len();

    rsx! {
        section {
            id: "gallery-view",
            class: format!("gallery-view {}", if hidden { "hidden" } else { "" }),

            div { class: "gallery-view__header",
                h1 { {t!("viewer-title")} }
                if count > 0 {
                    span { class: "gallery-view__meta", {t!("gallery-count", count = count)} }
                }
            }
            p { class: "gallery-view__intro", {t!("viewer-intro")} }

            if thumbs.is_empty() {
                p { class: "gallery-view__placeholder", {t!("viewer-empty")} }
            } else {
                div { id: "gallery-grid", class: "gallery-grid",
                    for thumb in thumbs.into_iter() {
                        {render_thumb(thumb, on_open)}
                    }
                }
            }
        }
    }
}

fn render_thumb(thumb: Thumb, on_open: EventHandler<String>) -> Element {
    let Thumb { id, src, label } = thumb;
    let open_id = id.clone();

    rsx! {
        button {
            r#type: "button",
            class: "thumb",
            "data-id": "{id}",
            onclick: move |_| on_open.call(open_id.clone()),

            if let Some(src) = src.as_ref() {
                img { class: "thumb__image", src: "{src}", alt: "{id}", loading: "lazy" }
            } else {
                div { class: "thumb__image thumb__image--empty" }
            }
            p { class: "thumb__label", "{label}" }
        }
    }
}
