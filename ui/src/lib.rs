//! Shared UI crate for Levelscope: dataset loading, the gallery and detail
//! components, views, localization and the theme.

use dioxus::prelude::*;

pub mod core;
pub mod data;
pub mod gallery;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Shared theme. Desktop embeds the same file with `include_str!`.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
