use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The selected lowest-score model of one folder, as written to the summary table.
///
/// Column names match the table header `folder,best_model,molpdf`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestModelEntry {
    pub folder: PathBuf,
    pub best_model: String,
    #[serde(rename = "molpdf")]
    pub score: f64,
}

/// The part of a summary row the drivers need. Other columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelTarget {
    pub folder: PathBuf,
    pub best_model: String,
}

impl ModelTarget {
    pub fn new(folder: impl Into<PathBuf>, best_model: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            best_model: best_model.into(),
        }
    }

    /// Full path of the structure file: `folder/best_model`.
    pub fn structure_path(&self) -> PathBuf {
        self.folder.join(&self.best_model)
    }
}
