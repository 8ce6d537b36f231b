use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::detail::{LevelDetail, TextSlot};
use crate::core::level::{Level, Model};
use crate::core::stage::{stages_ready, Scrolly, StageMode};
use crate::gallery::labels::{level_summary, level_title, missing_text, status_label};
use crate::gallery::observe;
use crate::t;

/// One level of the detail view: both model texts in a scrollable pane whose
/// layout follows the stage scrolled into view.
#[component]
pub fn LevelPanel(
    detail: LevelDetail,
    revealed: bool,
    on_section_mounted: EventHandler<(Level, Rc<MountedData>)>,
) -> Element {
    let level = detail.level;
    let eligible = detail.eligible;

    let pane = use_signal(Scrolly::default);
    let mut container = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut stages = use_signal(Vec::<(StageMode, Rc<MountedData>)>::new);

    let state = pane();
    let status = status_label(detail.status.as_deref());
    let has_entailment = if eligible { "true" } else { "false" };

    rsx! {
        section {
            class: format!("level {}", if revealed { "visible" } else { "" }),
            "data-level": level.as_str(),
            onmounted: move |evt| on_section_mounted.call((level, evt.data())),

            header { class: "level__header",
                h2 { class: "level__title", {level_title(level)} }
                p { class: "level__summary", {level_summary(level)} }
            }

            div {
                class: format!("lvl-scrolly {}", state.mode.css_class()),
                "data-scroll-level": level.as_str(),
                "data-has-entailment": has_entailment,
                onmounted: move |evt| {
                    container.set(Some(evt.data()));
                    if stages_ready(stages.peek().iter().map(|(stage, _)| *stage)) {
                        spawn(track_stages(container, stages, pane, eligible));
                    }
                },
                onscroll: move |_| {
                    spawn(track_stages(container, stages, pane, eligible));
                },

                div { class: "lvl-sticky",
                    div { class: "lvl-panes",
                        for model in Model::ALL {
                            {render_pane(level, model, detail.text(model))}
                        }
                    }

                    div { class: "lvl-extra",
                        span {
                            class: "entailment-label",
                            title: t!("detail-entailment-label"),
                            "data-extra-level": level.as_str(),
                            "{status}"
                        }
                        if !detail.comment.is_empty() {
                            p {
                                class: "entailment-comment",
                                title: t!("detail-comment-label"),
                                "data-extra-level": level.as_str(),
                                "{detail.comment}"
                            }
                        }
                    }
                }

                div { class: "lvl-stages",
                    for stage in StageMode::ALL {
                        div {
                            key: "{stage.data_name()}",
                            class: format!(
                                "lvl-stage {}",
                                if state.is_active(stage) { "active-stage" } else { "" }
                            ),
                            "data-stage": stage.data_name(),
                            onmounted: move |evt| {
                                stages.with_mut(|nodes| observe::register(nodes, stage, evt.data()));
                                // Initial measurement once the last stage is in place.
                                if stages_ready(stages.peek().iter().map(|(stage, _)| *stage)) {
                                    spawn(track_stages(container, stages, pane, eligible));
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

fn render_pane(level: Level, model: Model, slot: &TextSlot) -> Element {
    let (text, missing) = match slot.as_text() {
        Some(text) => (text.to_string(), false),
        None => (missing_text(model), true),
    };

    rsx! {
        article { class: "lvl-pane lvl-pane--{model.key()}",
            h3 { class: "lvl-pane__model", "{model.display_name()}" }
            p {
                id: "text-{level}-{model.key()}",
                class: format!(
                    "lvl-pane__text {}",
                    if missing { "lvl-pane__text--missing" } else { "" }
                ),
                "{text}"
            }
        }
    }
}

async fn track_stages(
    container: Signal<Option<Rc<MountedData>>>,
    stages: Signal<Vec<(StageMode, Rc<MountedData>)>>,
    mut pane: Signal<Scrolly>,
    eligible: bool,
) {
    let Some(root) = container() else {
        return;
    };
    let targets = stages();
    let Some(measured) = observe::measure(&root, &targets).await else {
        return;
    };

    let current = *pane.peek();
    let mut next = current;
    next.observe(eligible, measured.scroll_top, &measured.samples);
    if next != current {
        pane.set(next);
    }
}
