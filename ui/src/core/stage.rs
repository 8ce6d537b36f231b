//! Layout state of a level's scrollable text pane.
//!
//! Each level pane scrolls through three stages. Which stage is most visible
//! picks the layout, except that the pane stays `Split` until the reader has
//! actually scrolled, and forever when the level is not an entailment.

use crate::core::visibility::{most_visible, VisibilitySample};

/// Minimum scroll offset (px) before the pane may leave `Split`.
pub const SETTLE_OFFSET_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StageMode {
    /// Model texts side by side.
    #[default]
    Split,
    /// Model texts stacked over each other.
    Overlap,
    /// Merged texts plus the human annotation.
    Extra,
}

impl StageMode {
    pub const ALL: [StageMode; 3] = [StageMode::Split, StageMode::Overlap, StageMode::Extra];

    pub fn data_name(self) -> &'static str {
        match self {
            StageMode::Split => "split",
            StageMode::Overlap => "overlap",
            StageMode::Extra => "extra",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StageMode::Split => "stage-split",
            StageMode::Overlap => "stage-overlap",
            StageMode::Extra => "stage-extra",
        }
    }
}

/// Next pane mode given the level's eligibility, the pane's scroll offset and
/// the stage currently most in view.
pub fn transition(eligible: bool, scroll_top: f64, most_visible: StageMode) -> StageMode {
    if scroll_top < SETTLE_OFFSET_PX || !eligible {
        StageMode::Split
    } else {
        most_visible
    }
}

/// Whether every stage of a pane has a node to measure.
pub fn stages_ready(registered: impl IntoIterator<Item = StageMode>) -> bool {
    let registered: Vec<StageMode> = registered.into_iter().collect();
    StageMode::ALL.iter().all(|stage| registered.contains(stage))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scrolly {
    pub mode: StageMode,
    pub active: Option<StageMode>,
}

impl Scrolly {
    /// Fold one round of stage visibility into the pane state. A round where
    /// no stage intersects leaves everything untouched.
    pub fn observe(
        &mut self,
        eligible: bool,
        scroll_top: f64,
        samples: &[VisibilitySample<StageMode>],
    ) {
        let Some(best) = most_visible(samples) else {
            return;
        };
        self.active = Some(best);
        self.mode = transition(eligible, scroll_top, best);
    }

    pub fn is_active(&self, stage: StageMode) -> bool {
        self.active == Some(stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(split: f64, overlap: f64, extra: f64) -> Vec<VisibilitySample<StageMode>> {
        vec![
            VisibilitySample::new(StageMode::Split, split),
            VisibilitySample::new(StageMode::Overlap, overlap),
            VisibilitySample::new(StageMode::Extra, extra),
        ]
    }

    #[test]
    fn follows_most_visible_stage_once_scrolled() {
        assert_eq!(transition(true, 120.0, StageMode::Overlap), StageMode::Overlap);
        assert_eq!(transition(true, 10.0, StageMode::Extra), StageMode::Extra);
        assert_eq!(transition(true, 480.0, StageMode::Split), StageMode::Split);
    }

    #[test]
    fn barely_scrolled_pane_stays_split() {
        assert_eq!(transition(true, 0.0, StageMode::Extra), StageMode::Split);
        assert_eq!(transition(true, 9.9, StageMode::Overlap), StageMode::Split);
    }

    #[test]
    fn ineligible_level_never_leaves_split() {
        for stage in StageMode::ALL {
            for offset in [0.0, 5.0, 10.0, 250.0, 10_000.0] {
                assert_eq!(transition(false, offset, stage), StageMode::Split);
            }
        }
    }

    #[test]
    fn active_stage_moves_even_when_clamped() {
        let mut pane = Scrolly::default();
        pane.observe(false, 300.0, &samples(0.1, 0.2, 0.9));
        assert_eq!(pane.mode, StageMode::Split);
        assert!(pane.is_active(StageMode::Extra));
        assert!(!pane.is_active(StageMode::Split));
    }

    #[test]
    fn first_measurement_marks_split_active() {
        let mut pane = Scrolly::default();
        assert!(!pane.is_active(StageMode::Split));

        pane.observe(true, 0.0, &samples(1.0, 0.25, 0.0));
        assert_eq!(pane.mode, StageMode::Split);
        assert!(pane.is_active(StageMode::Split));
    }

    #[test]
    fn stages_ready_once_all_three_register() {
        let none: [StageMode; 0] = [];
        assert!(!stages_ready(none));
        assert!(!stages_ready([StageMode::Split, StageMode::Overlap]));
        assert!(stages_ready([StageMode::Extra, StageMode::Split, StageMode::Overlap]));
    }

    #[test]
    fn no_intersection_keeps_previous_state() {
        let mut pane = Scrolly::default();
        pane.observe(true, 200.0, &samples(0.0, 0.8, 0.1));
        assert_eq!(pane.mode, StageMode::Overlap);

        pane.observe(true, 400.0, &samples(0.0, 0.0, 0.0));
        assert_eq!(pane.mode, StageMode::Overlap);
        assert!(pane.is_active(StageMode::Overlap));
    }

    #[test]
    fn css_classes_are_distinct() {
        let classes: Vec<_> = StageMode::ALL.iter().map(|m| m.css_class()).collect();
        assert_eq!(classes, vec!["stage-split", "stage-overlap", "stage-extra"]);
        assert_eq!(StageMode::default(), StageMode::Split);
    }
}
