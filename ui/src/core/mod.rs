//! Platform-agnostic model of the dataset and the viewer's display rules.

pub mod catalog;
pub mod detail;
pub mod format;
pub mod level;
pub mod stage;
pub mod visibility;
