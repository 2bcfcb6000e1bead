use std::path::{Path, PathBuf};

use crate::core::dataset::DatasetSplit;

/// Reorganization configuration containing all hardcoded values
///
/// This struct centralizes the folder names and the filename marker so the
/// reorganizer and its tests read them from one place.
#[derive(Debug, Clone)]
pub struct ReorganizeConfig {
    /// Splits to process, in order
    pub splits: Vec<DatasetSplit>,
    /// Class folder that gets split apart
    pub source_folder: &'static str,
    /// New folder receiving files whose name contains the marker
    pub selected_folder: &'static str,
    /// Name the source folder is renamed to once matching files are moved out
    pub renamed_folder: &'static str,
    /// Case-insensitive filename marker selecting files for `selected_folder`
    pub marker: &'static str,
}

impl Default for ReorganizeConfig {
    fn default() -> Self {
        Self {
            splits: DatasetSplit::all().to_vec(),
            source_folder: "PNEUMONIA",
            selected_folder: "VIRAL",
            renamed_folder: "BACTERIAL",
            marker: "virus",
        }
    }
}

impl ReorganizeConfig {
    /// Dataset location used when no path is given: `<base>/data/chest_xray`
    pub fn default_dataset_path(base: &Path) -> PathBuf {
        base.join("data").join("chest_xray")
    }

    /// Class names present in a split once it has been reorganized
    pub fn class_names(&self) -> [&'static str; 3] {
        ["NORMAL", self.selected_folder, self.renamed_folder]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ReorganizeConfig::default();
        assert_eq!(config.source_folder, "PNEUMONIA");
        assert_eq!(config.selected_folder, "VIRAL");
        assert_eq!(config.renamed_folder, "BACTERIAL");
        assert_eq!(config.marker, "virus");
        assert_eq!(
            config.splits,
            vec![DatasetSplit::Train, DatasetSplit::Test, DatasetSplit::Val]
        );
    }

    #[test]
    fn test_default_dataset_path() {
        let path = ReorganizeConfig::default_dataset_path(Path::new("codes"));
        assert_eq!(path, PathBuf::from("codes").join("data").join("chest_xray"));
    }

    #[test]
    fn test_class_names() {
        let config = ReorganizeConfig::default();
        assert_eq!(config.class_names(), ["NORMAL", "VIRAL", "BACTERIAL"]);
    }
}
