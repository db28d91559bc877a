//! Folder listing and precondition guards

use crate::io::configuration::RECOGNIZED_EXTENSIONS;
use crate::io::error::{Result, TilePrepError, fs_error};
use std::path::{Path, PathBuf};

/// Whether a path carries one of the recognized image extensions
///
/// Matching is case-insensitive; files without an extension never match.
pub fn is_recognized(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lowered = ext.to_ascii_lowercase();
            RECOGNIZED_EXTENSIONS.contains(&lowered.as_str())
        })
}

/// Collect recognized image files from a folder in sorted order
///
/// Sorting makes batch iteration order deterministic across platforms.
///
/// # Errors
///
/// Returns [`TilePrepError::MissingFolder`] when the path is not a
/// directory, or [`TilePrepError::FileSystem`] when it cannot be read.
pub fn list_image_files(folder: &Path, role: &'static str) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(TilePrepError::MissingFolder {
            role,
            path: folder.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder).map_err(|e| fs_error(folder, "read directory", e))? {
        let path = entry
            .map_err(|e| fs_error(folder, "read directory entry", e))?
            .path();
        if path.is_file() && is_recognized(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Guard that a destination folder exists and holds no entries
///
/// Checked once before any batch work so a violated precondition leaves the
/// filesystem untouched.
///
/// # Errors
///
/// Returns [`TilePrepError::MissingFolder`] when the path is not a
/// directory and [`TilePrepError::OutputNotEmpty`] when it holds any entry.
pub fn ensure_output_empty(folder: &Path) -> Result<()> {
    if !folder.is_dir() {
        return Err(TilePrepError::MissingFolder {
            role: "Output",
            path: folder.to_path_buf(),
        });
    }
    let mut entries =
        std::fs::read_dir(folder).map_err(|e| fs_error(folder, "read directory", e))?;
    if entries.next().is_some() {
        return Err(TilePrepError::OutputNotEmpty {
            path: folder.to_path_buf(),
        });
    }
    Ok(())
}

/// Move a file into a destination folder, preserving its name
///
/// Falls back to copy-then-remove when a rename crosses filesystems. The
/// source folder loses the file either way.
///
/// # Errors
///
/// Returns [`TilePrepError::FileSystem`] when neither strategy succeeds.
pub fn move_into(source: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let name = source.file_name().ok_or_else(|| {
        fs_error(
            source,
            "move file",
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let dest = dest_dir.join(name);

    if std::fs::rename(source, &dest).is_err() {
        std::fs::copy(source, &dest).map_err(|e| fs_error(source, "copy file", e))?;
        std::fs::remove_file(source).map_err(|e| fs_error(source, "remove file", e))?;
    }
    Ok(dest)
}
