//! Where the dataset lives relative to the page (web) or resource directory
//! (desktop).

use crate::core::format::join_path;
use crate::core::level::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    /// Directory holding `L1.json` … `L4.json` and the results document.
    pub data_dir: String,
    /// Directory holding the chart images named by each record.
    pub image_dir: String,
    pub results_file: String,
}

impl Default for DataLayout {
    fn default() -> Self {
        Self {
            data_dir: "json".to_string(),
            image_dir: "gallery".to_string(),
            results_file: "result.json".to_string(),
        }
    }
}

impl DataLayout {
    pub fn level_path(&self, level: Level) -> String {
        join_path(&self.data_dir, &format!("{level}.json"))
    }

    pub fn results_path(&self) -> String {
        join_path(&self.data_dir, &self.results_file)
    }

    pub fn image_src(&self, file_name: &str) -> String {
        join_path(&self.image_dir, file_name)
    }
}
