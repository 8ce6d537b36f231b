//! Localized labels shared by the gallery and about views.

use crate::core::level::{Level, Model};
use crate::t;

pub(crate) fn level_title(level: Level) -> String {
    match level {
        Level::L1 => t!("level-l1-title"),
        Level::L2 => t!("level-l2-title"),
        Level::L3 => t!("level-l3-title"),
        Level::L4 => t!("level-l4-title"),
    }
}

pub(crate) fn level_summary(level: Level) -> String {
    match level {
        Level::L1 => t!("level-l1-summary"),
        Level::L2 => t!("level-l2-summary"),
        Level::L3 => t!("level-l3-summary"),
        Level::L4 => t!("level-l4-summary"),
    }
}

pub(crate) fn missing_text(model: Model) -> String {
    match model {
        Model::Gpt => t!("detail-missing-gpt"),
        Model::Gemini => t!("detail-missing-gemini"),
    }
}

pub(crate) fn status_label(status: Option<&str>) -> String {
    match status {
        Some(status) => status.to_string(),
        None => t!("detail-not-annotated"),
    }
}
