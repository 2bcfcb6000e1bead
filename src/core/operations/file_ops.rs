use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Result type for file operations
pub type FileOpResult<T> = Result<T, FileOpError>;

/// Error types for file operations
#[derive(Debug, Error)]
pub enum FileOpError {
    #[error("Destination already exists: {0:?}")]
    DestinationExists(PathBuf),
    #[error("Path has no file name: {0:?}")]
    NoFileName(PathBuf),
    #[error("Copy failed: {0}")]
    CopyFailed(String),
    #[error("Remove failed: {0}")]
    RemoveFailed(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> FileOpResult<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// List the regular files directly inside `dir`, sorted by path.
///
/// Subdirectories are skipped. Symlinks count as files when they point at one.
/// Any error opening the directory or reading an entry fails the whole listing.
pub fn list_regular_files(dir: &Path) -> FileOpResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        } else {
            debug!("Skipping non-file entry {:?}", path);
        }
    }
    files.sort();
    Ok(files)
}

/// Move a file from source to destination.
///
/// A plain rename is tried first. If that fails (e.g. the destination is on
/// another drive) the copy + remove pattern is used instead. An existing
/// destination is never overwritten.
///
/// # Arguments
/// * `src` - Source file path
/// * `dest` - Destination file path
///
/// # Returns
/// * `Ok(())` if successful
/// * `Err(FileOpError)` if the destination exists or copy/remove failed
pub fn move_file(src: &Path, dest: &Path) -> FileOpResult<()> {
    debug!("Moving file from {:?} to {:?}", src, dest);

    if dest.exists() {
        return Err(FileOpError::DestinationExists(dest.to_path_buf()));
    }

    match fs::rename(src, dest) {
        Ok(()) => return Ok(()),
        Err(e) => warn!("Rename {:?} -> {:?} failed ({}), falling back to copy", src, dest, e),
    }

    copy_then_remove(src, dest)
}

/// Copy `src` to `dest`, then delete `src`. The copy is removed again if the
/// original cannot be deleted.
fn copy_then_remove(src: &Path, dest: &Path) -> FileOpResult<()> {
    if let Err(e) = fs::copy(src, dest) {
        error!("Failed to copy file from {:?} to {:?}: {}", src, dest, e);
        return Err(FileOpError::CopyFailed(format!(
            "Failed to copy from {:?} to {:?}: {}",
            src, dest, e
        )));
    }

    // Remove the original file after successful copy
    if let Err(e) = fs::remove_file(src) {
        error!("Failed to remove original file {:?} after copy: {}", src, e);
        let _ = fs::remove_file(dest);
        return Err(FileOpError::RemoveFailed(format!(
            "Failed to remove original file {:?}: {}",
            src, e
        )));
    }

    Ok(())
}

/// Move `src` into `dir`, keeping its file name. Returns the new path.
pub fn move_into_dir(src: &Path, dir: &Path) -> FileOpResult<PathBuf> {
    let file_name = src
        .file_name()
        .ok_or_else(|| FileOpError::NoFileName(src.to_path_buf()))?;
    let dest = dir.join(file_name);
    move_file(src, &dest)?;
    Ok(dest)
}

/// Rename the directory `src` to `dest`.
///
/// Fails if `dest` already exists, even as an empty directory.
pub fn rename_dir(src: &Path, dest: &Path) -> FileOpResult<()> {
    if dest.exists() {
        return Err(FileOpError::DestinationExists(dest.to_path_buf()));
    }
    fs::rename(src, dest)?;
    Ok(())
}
