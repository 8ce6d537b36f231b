use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::catalog::SharedCatalog;
use crate::core::detail::{DetailModel, LevelDetail};
use crate::core::level::Level;
use crate::core::visibility::FadeIn;
use crate::data::DataLayout;
use crate::gallery::{observe, LevelPanel};
use crate::t;

/// Detail page for one visualization. Callers key it by identifier so every
/// opening starts scrolled to the top with each level split.
#[component]
pub fn DetailView(catalog: SharedCatalog, vis_id: String, on_back: EventHandler<()>) -> Element {
    let layout = try_use_context::<DataLayout>().unwrap_or_default();

    let fade = use_signal(FadeIn::<Level>::default);
    let mut root = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut sections = use_signal(Vec::<(Level, Rc<MountedData>)>::new);

    let Some(model) = DetailModel::build(&catalog, &layout, &vis_id) else {
        return rsx! {};
    };

    let levels: Vec<(String, LevelDetail, bool)> = model
        .levels
        .iter()
        .map(|detail| {
            let revealed = fade.read().is_revealed(&detail.level);
            (detail.level.to_string(), detail.clone(), revealed)
        })
        .collect();

    rsx! {
        section {
            id: "detail-view",
            class: "detail-view",
            onmounted: move |evt| {
                root.set(Some(evt.data()));
                spawn(reveal_sections(root, sections, fade));
            },
            onscroll: move |_| {
                spawn(reveal_sections(root, sections, fade));
            },

            div { class: "detail__toolbar",
                button {
                    id: "back-btn",
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| on_back.call(()),
                    {t!("detail-back")}
                }
            }

            header { class: "detail__header",
                if let Some(src) = model.image_src.as_ref() {
                    img {
                        id: "detail-image",
                        class: "detail__image",
                        src: "{src}",
                        alt: "{model.id_label}",
                    }
                }
                div { class: "detail__meta",
                    h1 { id: "detail-id", "{model.id_label}" }
                    p { id: "detail-label", class: "detail__label", "{model.file_label}" }
                    p { class: "detail__hint", {t!("detail-scroll-hint")} }
                }
            }

            for (key, detail, revealed) in levels {
                LevelPanel {
                    key: "{key}",
                    detail,
                    revealed,
                    on_section_mounted: move |(level, node): (Level, Rc<MountedData>)| {
                        sections.with_mut(|nodes| observe::register(nodes, level, node));
                        spawn(reveal_sections(root, sections, fade));
                    },
                }
            }
        }
    }
}

/// One-shot fade-in of level sections that are at least partly on screen.
async fn reveal_sections(
    root: Signal<Option<Rc<MountedData>>>,
    sections: Signal<Vec<(Level, Rc<MountedData>)>>,
    mut fade: Signal<FadeIn<Level>>,
) {
    let Some(node) = root() else {
        return;
    };
    let targets = sections();
    let Some(measured) = observe::measure(&node, &targets).await else {
        return;
    };

    let pending = {
        let current = fade.peek();
        measured
            .samples
            .iter()
            .any(|sample| current.would_reveal(&sample.key, sample.ratio))
    };
    if !pending {
        return;
    }
    fade.with_mut(|state| {
        for sample in &measured.samples {
            state.observe(sample.key, sample.ratio);
        }
    });
}
