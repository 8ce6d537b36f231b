//! In-memory index of visualizations and their entailment judgments.
//!
//! The catalog is assembled once from the level documents and the results
//! document, then shared read-only with every view.

use std::collections::BTreeMap;
use std::ops::Deref;
use std::rc::Rc;

use dioxus::logger::tracing::warn;

use crate::core::level::{Level, Model};
use crate::data::documents::{LevelDocument, ResultEntry, ResultsDocument};

/// Identifiers that never show up in the gallery, whatever the data says.
pub const EXCLUDED_IDS: [&str; 2] = ["010", "025"];

/// Prefix of visualization keys in the results document.
pub const RESULT_KEY_PREFIX: &str = "vis_";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelTexts {
    pub gpt: String,
    pub gemini: String,
}

impl LevelTexts {
    pub fn get(&self, model: Model) -> &str {
        match model {
            Model::Gpt => &self.gpt,
            Model::Gemini => &self.gemini,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visualization {
    pub id: String,
    pub file_name: Option<String>,
    pub levels: BTreeMap<Level, LevelTexts>,
}

impl Visualization {
    fn new(id: String, file_name: Option<String>) -> Self {
        Self {
            id,
            file_name,
            levels: BTreeMap::new(),
        }
    }

    /// `None` when the level is absent or the model left it empty.
    pub fn text(&self, level: Level, model: Model) -> Option<&str> {
        self.levels
            .get(&level)
            .map(|texts| texts.get(model))
            .filter(|text| !text.is_empty())
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn label(&self) -> String {
        match self.file_name() {
            Some(name) => name.to_string(),
            None => format!("Visualization {}", self.id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntailmentRecord {
    pub status: BTreeMap<Level, String>,
    pub annotation: BTreeMap<Level, String>,
}

impl EntailmentRecord {
    fn from_entry(entry: &ResultEntry) -> Self {
        let mut record = Self::default();
        for level in Level::ALL {
            if let Some(status) = entry.status(level) {
                record.status.insert(level, status.to_string());
            }
            if let Some(note) = entry.annotation(level) {
                record.annotation.insert(level, note.to_string());
            }
        }
        record
    }

    pub fn status(&self, level: Level) -> Option<&str> {
        self.status.get(&level).map(String::as_str)
    }

    pub fn annotation(&self, level: Level) -> Option<&str> {
        self.annotation.get(&level).map(String::as_str)
    }

    pub fn is_entailment(&self, level: Level) -> bool {
        self.status(level).is_some_and(is_entailment_status)
    }
}

/// Only the exact `entailment` verdict (any case) unlocks the merged stages.
pub fn is_entailment_status(status: &str) -> bool {
    status.eq_ignore_ascii_case("entailment")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    visualizations: BTreeMap<String, Visualization>,
    entailments: BTreeMap<String, EntailmentRecord>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn visualization(&self, id: &str) -> Option<&Visualization> {
        self.visualizations.get(id)
    }

    pub fn entailment(&self, id: &str) -> Option<&EntailmentRecord> {
        self.entailments.get(id)
    }

    pub fn len(&self) -> usize {
        self.visualizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visualizations.is_empty()
    }

    pub fn annotated_count(&self) -> usize {
        self.visualizations
            .keys()
            .filter(|id| self.entailments.contains_key(*id))
            .count()
    }

    /// Identifiers shown in the gallery: ascending, exclusions removed.
    pub fn gallery_ids(&self) -> Vec<&str> {
        // BTreeMap keys are already in ascending byte order.
        self.visualizations
            .keys()
            .map(String::as_str)
            .filter(|id| !EXCLUDED_IDS.contains(id))
            .collect()
    }
}

/// Cheap handle to a loaded catalog for component props. Two handles are
/// equal only when they point at the same load, so prop diffing never walks
/// the dataset.
#[derive(Debug, Clone)]
pub struct SharedCatalog(Rc<Catalog>);

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self(Rc::new(catalog))
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}

impl Deref for SharedCatalog {
    type Target = Catalog;

    fn deref(&self) -> &Catalog {
        &self.0
    }
}

impl PartialEq for SharedCatalog {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Merge one level document. The first document mentioning an id fixes
    /// its file name.
    pub fn add_level(&mut self, level: Level, doc: &LevelDocument) -> &mut Self {
        for entry in &doc.visualizations {
            let vis = self
                .catalog
                .visualizations
                .entry(entry.vis_id.clone())
                .or_insert_with(|| Visualization::new(entry.vis_id.clone(), entry.file_name.clone()));

            vis.levels.insert(
                level,
                LevelTexts {
                    gpt: entry.text(Model::Gpt, level).to_string(),
                    gemini: entry.text(Model::Gemini, level).to_string(),
                },
            );
        }
        self
    }

    pub fn add_results(&mut self, doc: &ResultsDocument) -> &mut Self {
        for (key, value) in doc {
            let Some(id) = key.strip_prefix(RESULT_KEY_PREFIX) else {
                continue;
            };
            let entry = match serde_json::from_value::<ResultEntry>(value.clone()) {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("results entry {key} is malformed ({err}); treating it as unannotated");
                    ResultEntry::default()
                }
            };
            self.catalog
                .entailments
                .insert(id.to_string(), EntailmentRecord::from_entry(&entry));
        }
        self
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }
}
