//! Everything the detail view shows for one visualization, resolved ahead of
//! rendering so defaults are decided in one place.

use crate::core::catalog::{is_entailment_status, Catalog};
use crate::core::format::vis_label;
use crate::core::level::{Level, Model};
use crate::data::DataLayout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSlot {
    Provided(String),
    /// Rendered as the localized "no text for this level" placeholder.
    Missing,
}

impl TextSlot {
    fn from_text(text: Option<&str>) -> Self {
        match text {
            Some(text) => TextSlot::Provided(text.to_string()),
            None => TextSlot::Missing,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TextSlot::Provided(text) => Some(text),
            TextSlot::Missing => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDetail {
    pub level: Level,
    pub gpt: TextSlot,
    pub gemini: TextSlot,
    /// `None` renders as "Not annotated".
    pub status: Option<String>,
    pub comment: String,
    /// Whether the pane may leave the split layout.
    pub eligible: bool,
}

impl LevelDetail {
    pub fn text(&self, model: Model) -> &TextSlot {
        match model {
            Model::Gpt => &self.gpt,
            Model::Gemini => &self.gemini,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailModel {
    pub id: String,
    pub id_label: String,
    pub file_label: String,
    pub image_src: Option<String>,
    pub levels: Vec<LevelDetail>,
}

impl DetailModel {
    /// `None` for identifiers the catalog does not know.
    pub fn build(catalog: &Catalog, layout: &DataLayout, id: &str) -> Option<Self> {
        let vis = catalog.visualization(id)?;
        let entailment = catalog.entailment(id);

        let levels = Level::ALL
            .into_iter()
            .map(|level| {
                let status = entailment.and_then(|record| record.status(level));
                LevelDetail {
                    level,
                    gpt: TextSlot::from_text(vis.text(level, Model::Gpt)),
                    gemini: TextSlot::from_text(vis.text(level, Model::Gemini)),
                    status: status.map(str::to_string),
                    comment: entailment
                        .and_then(|record| record.annotation(level))
                        .unwrap_or_default()
                        .to_string(),
                    eligible: status.is_some_and(is_entailment_status),
                }
            })
            .collect();

        Some(Self {
            id: vis.id.clone(),
            id_label: vis_label(&vis.id),
            file_label: vis.label(),
            image_src: vis.file_name().map(|name| layout.image_src(name)),
            levels,
        })
    }

    pub fn level(&self, level: Level) -> Option<&LevelDetail> {
        self.levels.iter().find(|detail| detail.level == level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::documents::{parse_level, parse_results};

    fn catalog(levels: &[(Level, &str)], results: &str) -> Catalog {
        let mut builder = Catalog::builder();
        for (level, raw) in levels {
            builder.add_level(*level, &parse_level("test", raw.as_bytes()).unwrap());
        }
        builder.add_results(&parse_results("test", results.as_bytes()).unwrap());
        builder.build()
    }

    #[test]
    fn gpt_only_l1_leaves_every_other_slot_missing() {
        let catalog = catalog(
            &[(
                Level::L1,
                r#"{"visualizations": [{"vis_id": "009", "file_name": "chart.png",
                    "models": {"gpt": {"L1_construction": "A grouped bar chart."}}}]}"#,
            )],
            "{}",
        );
        let detail = DetailModel::build(&catalog, &DataLayout::default(), "009").unwrap();

        assert_eq!(detail.id_label, "vis 009");
        assert_eq!(detail.file_label, "chart.png");
        assert_eq!(detail.image_src.as_deref(), Some("gallery/chart.png"));
        assert_eq!(detail.levels.len(), 4);

        let l1 = detail.level(Level::L1).unwrap();
        assert_eq!(l1.gpt, TextSlot::Provided("A grouped bar chart.".into()));
        assert_eq!(l1.gemini, TextSlot::Missing);

        for level in [Level::L2, Level::L3, Level::L4] {
            let slot = detail.level(level).unwrap();
            assert_eq!(slot.text(Model::Gpt), &TextSlot::Missing);
            assert_eq!(slot.text(Model::Gemini), &TextSlot::Missing);
        }
    }

    #[test]
    fn unannotated_visualization_has_no_status_or_comment() {
        let catalog = catalog(
            &[(Level::L2, r#"{"visualizations": [{"vis_id": "044", "file_name": "a.png"}]}"#)],
            r#"{"vis_045": {"entailment_status": {"L1": "entailment"}}}"#,
        );
        let detail = DetailModel::build(&catalog, &DataLayout::default(), "044").unwrap();
        for level in &detail.levels {
            assert_eq!(level.status, None);
            assert_eq!(level.comment, "");
            assert!(!level.eligible);
        }
    }

    #[test]
    fn eligibility_follows_exact_entailment_status() {
        let catalog = catalog(
            &[(Level::L1, r#"{"visualizations": [{"vis_id": "007"}]}"#)],
            r#"{"vis_007": {
                "entailment_status": {"L1": "Entailment", "L2": "neutral", "L3": "not entailment"},
                "human_annotation": {"L2": "Misreads the legend."}
            }}"#,
        );
        let detail = DetailModel::build(&catalog, &DataLayout::default(), "007").unwrap();

        let eligible: Vec<_> = detail.levels.iter().map(|l| l.eligible).collect();
        assert_eq!(eligible, vec![true, false, false, false]);
        assert_eq!(detail.level(Level::L2).unwrap().comment, "Misreads the legend.");
        assert_eq!(detail.level(Level::L4).unwrap().status, None);
        assert_eq!(detail.image_src, None);
        assert_eq!(detail.file_label, "Visualization 007");
    }

    #[test]
    fn unknown_identifier_builds_nothing() {
        let catalog = catalog(&[], "{}");
        assert!(DetailModel::build(&catalog, &DataLayout::default(), "009").is_none());
    }
}
