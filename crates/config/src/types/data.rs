//! Data file and directory settings

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

/// Locations of the input index and generated artifacts
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DataSettings {
    /// Input index file
    pub mindmap_csv_path: Utf8PathBuf,

    /// Directory for research output
    pub output_dir: Utf8PathBuf,

    /// Directory for cached responses
    pub cache_dir: Utf8PathBuf,

    /// Largest input file accepted, in megabytes
    pub max_file_size_mb: u64,
}

impl DataSettings {
    /// Directories that must exist before the application runs
    ///
    /// The parent of `mindmap_csv_path` is omitted when the index lives in the
    /// working directory.
    pub fn required_dirs(&self) -> Vec<&Utf8Path> {
        let mut dirs = vec![self.output_dir.as_path(), self.cache_dir.as_path()];
        if let Some(parent) = self.mindmap_csv_path.parent() {
            if !parent.as_str().is_empty() {
                dirs.push(parent);
            }
        }
        dirs
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            mindmap_csv_path: Utf8PathBuf::from("data/mindmap.csv"),
            output_dir: Utf8PathBuf::from("output"),
            cache_dir: Utf8PathBuf::from(".cache"),
            max_file_size_mb: 100,
        }
    }
}

impl crate::validation::Validate for DataSettings {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_positive("data.max_file_size_mb", self.max_file_size_mb, 0)
    }
}
