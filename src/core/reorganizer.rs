//! Dataset reorganization: split the source class folder of every dataset
//! split into a "selected" folder (files whose name contains the marker) and
//! the renamed remainder.
//!
//! Every failure is handled at the narrowest scope it affects. A failed file
//! move only skips that file, a missing or unreadable source folder only skips
//! that split, and nothing aborts the whole run.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info, info_span, warn};

use crate::config::ReorganizeConfig;
use crate::core::dataset::{DatasetSplit, SplitLayout, SplitState};
use crate::core::filter::MarkerFilter;
use crate::core::operations::{ensure_dir, list_regular_files, move_into_dir, rename_dir};

/// A file that could not be moved and was left in the source folder
#[derive(Debug, Clone, Serialize)]
pub struct MoveFailure {
    pub path: PathBuf,
    pub error: String,
}

/// What happened to a single split
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SplitOutcome {
    /// The split directory does not exist
    MissingSplit,
    /// Source folder gone, both target folders present
    AlreadyReorganized,
    /// Source folder gone and the targets are incomplete
    MissingSource,
    /// The selected folder could not be created
    CreateFailed { error: String },
    /// The source folder could not be listed; nothing was moved or renamed
    ListFailed { error: String },
    /// Files were partitioned; `rename_error` is set when the final rename failed
    Completed {
        files_moved: usize,
        move_failures: Vec<MoveFailure>,
        rename_error: Option<String>,
    },
}

impl SplitOutcome {
    /// True for outcomes logged at error level
    pub fn is_error(&self) -> bool {
        match self {
            SplitOutcome::MissingSplit | SplitOutcome::AlreadyReorganized => false,
            SplitOutcome::MissingSource
            | SplitOutcome::CreateFailed { .. }
            | SplitOutcome::ListFailed { .. } => true,
            SplitOutcome::Completed {
                move_failures,
                rename_error,
                ..
            } => !move_failures.is_empty() || rename_error.is_some(),
        }
    }

    pub fn files_moved(&self) -> usize {
        match self {
            SplitOutcome::Completed { files_moved, .. } => *files_moved,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub split: DatasetSplit,
    #[serde(flatten)]
    pub outcome: SplitOutcome,
}

/// Result of a whole reorganization run, one entry per split in processing order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReorganizeSummary {
    pub dataset_path: PathBuf,
    pub splits: Vec<SplitReport>,
}

impl ReorganizeSummary {
    pub fn outcome(&self, split: DatasetSplit) -> Option<&SplitOutcome> {
        self.splits
            .iter()
            .find(|report| report.split == split)
            .map(|report| &report.outcome)
    }

    pub fn total_files_moved(&self) -> usize {
        self.splits.iter().map(|r| r.outcome.files_moved()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.splits.iter().filter(|r| r.outcome.is_error()).count()
    }
}

/// Reorganize every configured split under `dataset_path`.
///
/// Never fails: problems are logged and recorded in the returned summary.
pub fn reorganize_dataset(dataset_path: &Path, config: &ReorganizeConfig) -> ReorganizeSummary {
    let filter = MarkerFilter::new(config.marker);
    let mut summary = ReorganizeSummary {
        dataset_path: dataset_path.to_path_buf(),
        splits: Vec::with_capacity(config.splits.len()),
    };

    for &split in &config.splits {
        let span = info_span!("reorganize_split", split = split.as_str());
        let _guard = span.enter();
        info!("--- Processing folder: {} ---", split);

        let layout = SplitLayout::new(dataset_path, split, config);
        let outcome = reorganize_split(&layout, &filter, config);
        summary.splits.push(SplitReport { split, outcome });
    }

    info!("--- Reorganization Complete! ---");
    info!(
        "Your data is now in {} classes: {}.",
        config.class_names().len(),
        config.class_names().join(", ")
    );
    info!(
        "Moved {} files in total, {} split(s) reported errors",
        summary.total_files_moved(),
        summary.error_count()
    );

    summary
}

/// Reorganize one split: ensure the selected folder, move matching files,
/// then rename the source folder.
pub fn reorganize_split(
    layout: &SplitLayout,
    filter: &MarkerFilter,
    config: &ReorganizeConfig,
) -> SplitOutcome {
    match layout.state() {
        SplitState::MissingSplit => {
            warn!("Folder {:?} not found. Skipping.", layout.split_dir);
            return SplitOutcome::MissingSplit;
        }
        SplitState::AlreadyReorganized => {
            info!(
                "Folder '{}' not found in {:?}.",
                config.source_folder, layout.split_dir
            );
            info!("Looks like this folder has already been reorganized. Skipping.");
            return SplitOutcome::AlreadyReorganized;
        }
        SplitState::MissingSource => {
            error!(
                "Folder {:?} not found in split '{}'! Cannot proceed.",
                layout.source, layout.split
            );
            return SplitOutcome::MissingSource;
        }
        SplitState::Ready => {}
    }

    if let Err(e) = ensure_dir(&layout.selected) {
        error!("Error creating {:?}: {}", layout.selected, e);
        return SplitOutcome::CreateFailed {
            error: e.to_string(),
        };
    }
    info!("Created/verified folder: {:?}", layout.selected);

    let files = match list_regular_files(&layout.source) {
        Ok(files) => files,
        Err(e) => {
            error!("Error reading {:?}: {}", layout.source, e);
            return SplitOutcome::ListFailed {
                error: e.to_string(),
            };
        }
    };

    let mut files_moved = 0;
    let mut move_failures = Vec::new();

    for path in files.into_iter().filter(|p| filter.matches(p)) {
        match move_into_dir(&path, &layout.selected) {
            Ok(_) => files_moved += 1,
            Err(e) => {
                error!("Error moving {:?}: {}", path, e);
                move_failures.push(MoveFailure {
                    path,
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        "Moved {} '{}' files to {:?}",
        files_moved,
        filter.marker(),
        layout.selected
    );

    let rename_error = match rename_dir(&layout.source, &layout.renamed) {
        Ok(()) => {
            info!("Renamed {:?} to {:?}", layout.source, layout.renamed);
            None
        }
        Err(e) => {
            error!("Error renaming {:?}: {}", layout.source, e);
            Some(e.to_string())
        }
    };

    SplitOutcome::Completed {
        files_moved,
        move_failures,
        rename_error,
    }
}
