//! Center-crop repair of quarantined images
//!
//! Produces grid-aligned versions of previously quarantined images by
//! cropping each to its recommended size around the center. Floor division
//! of the removed margin biases the crop toward the top-left by one pixel
//! when the margin is odd.

use crate::geometry::{TilingParams, center_offsets, recommended_crop};
use crate::io::error::{Result, TilePrepError};
use crate::io::folder::{ensure_output_empty, list_image_files};
use crate::io::progress::{ProgressManager, warn};
use crate::ops::cancel::CancelToken;
use crate::ops::report::{BatchOutcome, CropReport};
use image::GenericImageView;
use std::path::Path;

/// Center-crop every image in a folder to its recommended grid-aligned size
///
/// Cropped images keep their original filename. Per-file failures are
/// logged and skipped; the batch continues.
///
/// # Errors
///
/// Returns an error when the parameters are invalid, the source folder does
/// not exist, or the destination is missing or not empty. The destination
/// guard runs up front, before any file is processed.
pub fn auto_crop(
    incompatible: &Path,
    cropped: &Path,
    params: &TilingParams,
    token: &CancelToken,
    progress: Option<&ProgressManager>,
) -> Result<CropReport> {
    let step = params.step()?;
    let files = list_image_files(incompatible, "Incompatible")?;
    ensure_output_empty(cropped)?;
    if let Some(pm) = progress {
        pm.initialize(files.len());
    }

    token.reset();
    let mut count = 0;
    let mut skipped = 0;

    for path in &files {
        if token.is_cancelled() {
            return Ok(CropReport {
                outcome: BatchOutcome::Stopped,
                cropped: count,
                skipped,
                destination: cropped.to_path_buf(),
            });
        }
        if let Some(pm) = progress {
            pm.start_file(path);
        }

        match crop_one(path, cropped, params.tile_size, step) {
            Ok(()) => count += 1,
            Err(e) => {
                warn(progress, &format!("Error cropping {}: {e}", path.display()));
                skipped += 1;
            }
        }

        if let Some(pm) = progress {
            pm.file_done();
        }
    }

    Ok(CropReport {
        outcome: BatchOutcome::Completed,
        cropped: count,
        skipped,
        destination: cropped.to_path_buf(),
    })
}

fn crop_one(path: &Path, dest_dir: &Path, tile_size: u32, step: u32) -> Result<()> {
    let img = image::open(path).map_err(|e| TilePrepError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let (width, height) = img.dimensions();
    let (new_width, new_height) = recommended_crop(width, height, tile_size, step);
    let (left, top) = center_offsets(width, height, new_width, new_height);

    let name = path.file_name().ok_or_else(|| {
        crate::io::error::fs_error(
            path,
            "crop file",
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let dest = dest_dir.join(name);

    img.crop_imm(left, top, new_width, new_height)
        .save(&dest)
        .map_err(|e| TilePrepError::ImageExport {
            path: dest.clone(),
            source: e,
        })
}
