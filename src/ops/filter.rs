//! Compatibility classification and quarantine relocation
//!
//! Classification is a pure decision ([`Compatibility::classify`]); this
//! module contributes the effecting half: moving incompatible files into a
//! quarantine folder and writing a recommendation artifact next to each.
//! Only image headers are read, never full pixel data.

use crate::geometry::{Compatibility, TilingParams};
use crate::io::configuration::RECOMMENDATION_GUIDANCE;
use crate::io::error::{Result, fs_error};
use crate::io::folder::{list_image_files, move_into};
use crate::io::progress::{ProgressManager, warn};
use crate::ops::cancel::CancelToken;
use crate::ops::report::{BatchOutcome, FilterReport};
use std::path::Path;

/// Quarantine images whose dimensions the tile grid cannot cover exactly
///
/// Incompatible files are moved (not copied) into `quarantine` and a UTF-8
/// artifact `<stem>.txt` with the recommended crop is written beside each.
/// Per-file failures are logged and skipped; the batch continues.
///
/// # Errors
///
/// Returns an error when the parameters are invalid, the input folder does
/// not exist, or the quarantine folder cannot be created. No files have
/// been touched in any of these cases.
pub fn filter_incompatible(
    input: &Path,
    quarantine: &Path,
    params: &TilingParams,
    token: &CancelToken,
    progress: Option<&ProgressManager>,
) -> Result<FilterReport> {
    let step = params.step()?;
    let files = list_image_files(input, "Input")?;
    std::fs::create_dir_all(quarantine)
        .map_err(|e| fs_error(quarantine, "create directory", e))?;
    if let Some(pm) = progress {
        pm.initialize(files.len());
    }

    token.reset();
    Ok(filter_files(
        &files, quarantine, params.tile_size, step, token, progress,
    ))
}

// Effecting loop over a pre-collected file list; the caller has already
// reset the token, so a cancel observed here is a genuine stop request.
fn filter_files(
    files: &[std::path::PathBuf],
    quarantine: &Path,
    tile_size: u32,
    step: u32,
    token: &CancelToken,
    progress: Option<&ProgressManager>,
) -> FilterReport {
    let mut moved = 0;
    let mut skipped = 0;

    for path in files {
        if token.is_cancelled() {
            return FilterReport {
                outcome: BatchOutcome::Stopped,
                moved,
                skipped,
                quarantine: quarantine.to_path_buf(),
            };
        }
        if let Some(pm) = progress {
            pm.start_file(path);
        }

        match image::image_dimensions(path) {
            Ok((width, height)) => {
                let verdict = Compatibility::classify(width, height, tile_size, step);
                if let Some((rec_width, rec_height)) = verdict.recommended() {
                    match quarantine_file(path, quarantine, rec_width, rec_height) {
                        Ok(()) => moved += 1,
                        Err(e) => {
                            warn(progress, &format!("Error processing {}: {e}", path.display()));
                            skipped += 1;
                        }
                    }
                }
            }
            Err(e) => {
                warn(progress, &format!("Error processing {}: {e}", path.display()));
                skipped += 1;
            }
        }

        if let Some(pm) = progress {
            pm.file_done();
        }
    }

    FilterReport {
        outcome: BatchOutcome::Completed,
        moved,
        skipped,
        quarantine: quarantine.to_path_buf(),
    }
}

fn quarantine_file(path: &Path, quarantine: &Path, width: u32, height: u32) -> Result<()> {
    let dest = move_into(path, quarantine)?;
    write_recommendation(&dest, width, height)
}

/// Write the recommendation artifact next to a quarantined image
///
/// The artifact keeps the legacy text unchanged for undersized images, whose
/// recommendation echoes the original dimensions; callers that need the
/// distinction use [`Compatibility`] directly.
///
/// # Errors
///
/// Returns [`crate::TilePrepError::FileSystem`] when the text file cannot
/// be written.
pub fn write_recommendation(image_path: &Path, width: u32, height: u32) -> Result<()> {
    let txt_path = image_path.with_extension("txt");
    let mut content = format!("Recommended crop size: {width} x {height}\n");
    for line in RECOMMENDATION_GUIDANCE {
        content.push_str(line);
        content.push('\n');
    }
    std::fs::write(&txt_path, content).map_err(|e| fs_error(&txt_path, "write file", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precancelled_token_stops_before_any_file() {
        let dir = tempfile::tempdir().unwrap();
        let quarantine = dir.path().join("quarantine");
        std::fs::create_dir(&quarantine).unwrap();
        let files = vec![dir.path().join("missing.png")];

        let token = CancelToken::new();
        token.cancel();
        let report = filter_files(&files, &quarantine, 512, 256, &token, None);

        assert_eq!(report.outcome, BatchOutcome::Stopped);
        assert_eq!(report.moved, 0);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.to_string(), "Process stopped by user.");
    }
}
