use std::path::{Path, PathBuf};

use crate::config::ReorganizeConfig;

use super::DatasetSplit;

/// Where a split stands before any mutation happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitState {
    /// `root/<split>` does not exist
    MissingSplit,
    /// Source folder is present and can be reorganized
    Ready,
    /// Source folder is gone and both target folders exist
    AlreadyReorganized,
    /// Source folder is gone and the targets are incomplete
    MissingSource,
}

/// Resolved folder paths for one split of the dataset
#[derive(Debug, Clone)]
pub struct SplitLayout {
    pub split: DatasetSplit,
    pub split_dir: PathBuf,
    pub source: PathBuf,
    pub selected: PathBuf,
    pub renamed: PathBuf,
}

impl SplitLayout {
    pub fn new(root: &Path, split: DatasetSplit, config: &ReorganizeConfig) -> Self {
        let split_dir = root.join(split.as_str());
        Self {
            split,
            source: split_dir.join(config.source_folder),
            selected: split_dir.join(config.selected_folder),
            renamed: split_dir.join(config.renamed_folder),
            split_dir,
        }
    }

    /// Inspect the filesystem and classify the split
    pub fn state(&self) -> SplitState {
        if !self.split_dir.exists() {
            SplitState::MissingSplit
        } else if self.source.exists() {
            SplitState::Ready
        } else if self.selected.exists() && self.renamed.exists() {
            SplitState::AlreadyReorganized
        } else {
            SplitState::MissingSource
        }
    }
}
