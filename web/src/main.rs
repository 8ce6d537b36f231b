use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::data::{DataLayout, DataSource, HttpSource};
use ui::views::{About, Viewer};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Viewer {},
    #[route("/about")]
    About {},
}

fn nav_gallery(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Viewer {},
        "{label}"
    })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::About {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        gallery: nav_gallery,
        about: nav_about,
    });

    // Documents and images are served next to the page (`json/`, `gallery/`).
    use_context_provider(|| DataSource::Http(HttpSource::page_relative()));
    use_context_provider(DataLayout::default);

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web router layout around the shared `AppNavbar`.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
