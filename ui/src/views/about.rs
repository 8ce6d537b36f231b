use dioxus::prelude::*;

use crate::core::level::Level;
use crate::gallery::labels::{level_summary, level_title};
use crate::t;

#[component]
pub fn About() -> Element {
    // Subscribe to the global language code (if provided) so the page
    // re-renders when the locale changes elsewhere.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-about",
            h1 { {t!("about-title")} }
            p { {t!("about-intro")} }

            h2 { {t!("about-levels-heading")} }
            dl { class: "page-about__levels",
                for level in Level::ALL {
                    dt { {level_title(level)} }
                    dd { {level_summary(level)} }
                }
            }

            h2 { {t!("about-models-heading")} }
            p { {t!("about-models-body")} }

            h2 { {t!("about-entailment-heading")} }
            p { {t!("about-entailment-body")} }
        }
    }
}
