//! Wire shapes of the five JSON documents the viewer reads.
//!
//! Level documents (`L1.json` … `L4.json`):
//! ```text
//! { "visualizations": [
//!     { "vis_id": "009", "file_name": "chart.png",
//!       "models": { "gpt":    { "L1_construction": "…" },
//!                   "gemini": { "L1_construction": "…" } } } ] }
//! ```
//!
//! Results document (`result.json`), keyed by `"vis_" + id`:
//! ```text
//! { "vis_009": { "entailment_status": { "L1": "entailment" },
//!                "human_annotation":  { "L1": "…" } } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::level::{Level, Model};
use crate::data::LoadError;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LevelDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub visualizations: Vec<LevelEntry>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LevelEntry {
    pub vis_id: String,
    #[serde(default)]
    pub file_name: Option<String>,
    /// model key -> `{ level field name -> text }`, kept loose so `null`
    /// or non-object entries read as "no text".
    #[serde(default, deserialize_with = "null_as_default")]
    pub models: BTreeMap<String, Value>,
}

impl LevelEntry {
    /// Text a model produced for `level`; anything that is not a non-empty
    /// string reads as empty.
    pub fn text(&self, model: Model, level: Level) -> &str {
        self.models
            .get(model.key())
            .and_then(Value::as_object)
            .and_then(|fields| fields.get(level.field_name()))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

/// Raw results document. Entries stay as JSON values until the catalog
/// decides which keys it cares about.
pub type ResultsDocument = BTreeMap<String, Value>;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ResultEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub entailment_status: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub human_annotation: BTreeMap<String, Value>,
}

impl ResultEntry {
    pub fn status(&self, level: Level) -> Option<&str> {
        non_empty(self.entailment_status.get(level.as_str()))
    }

    pub fn annotation(&self, level: Level) -> Option<&str> {
        non_empty(self.human_annotation.get(level.as_str()))
    }
}

/// `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

pub fn parse_level(path: &str, bytes: &[u8]) -> Result<LevelDocument, LoadError> {
    serde_json::from_slice(bytes).map_err(|source| LoadError::Parse {
        path: path.to_string(),
        source,
    })
}

pub fn parse_results(path: &str, bytes: &[u8]) -> Result<ResultsDocument, LoadError> {
    serde_json::from_slice(bytes).map_err(|source| LoadError::Parse {
        path: path.to_string(),
        source,
    })
}
