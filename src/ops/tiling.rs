//! Tile extraction with boundary padding policies
//!
//! Walks the tile grid of every source image in row-major order, crops each
//! cell, and normalizes boundary tiles according to the selected policy.
//! Tiles are written to disk as they are produced and never held in bulk
//! memory.

use crate::geometry::grid::{GridShape, TileBox, compute_step};
use crate::geometry::TilingParams;
use crate::io::configuration::TILE_NAME_INFIX;
use crate::io::error::{Result, TilePrepError, fs_error, invalid_parameter};
use crate::io::folder::{ensure_output_empty, list_image_files};
use crate::io::progress::{ProgressManager, warn};
use crate::ops::cancel::CancelToken;
use crate::ops::report::{BatchOutcome, TilingReport};
use image::{ImageBuffer, RgbImage, imageops};
use std::path::{Path, PathBuf};

/// How a boundary tile smaller than the configured size is normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadPolicy {
    /// Save the tile at its natural, possibly smaller, size
    #[default]
    None,
    /// Replicate edge pixels outward to exactly the tile size
    ExtendEdges,
    /// Shift the crop box backward so it touches the far image boundary,
    /// re-overlapping the preceding tile instead of padding
    AutoAdjust,
    /// Paste the crop at the origin of a black square canvas
    PadToSquare,
}

/// Encoding used for the produced tile files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JPEG encoding, `.jpg` extension
    Jpg,
    /// PNG encoding, `.png` extension; also the default when no explicit
    /// format is requested
    #[default]
    Png,
}

impl OutputFormat {
    /// File extension for tiles in this format
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Png => "png",
        }
    }
}

/// Extract the full tile set from every image in a folder
///
/// Tiles are named `{stem}_tile_{i}_{j}.{ext}` with `i` the column and `j`
/// the row; when a caption is supplied, a sibling `.txt` with that literal
/// text accompanies every tile. Per-image failures are logged and skipped;
/// tiles already written stay on disk.
///
/// # Errors
///
/// Returns an error when the parameters are invalid, the output folder is
/// missing or not empty, or the input folder does not exist. All guards run
/// before any file is touched, so the error branch implies zero filesystem
/// changes.
pub fn extract_tiles(
    input: &Path,
    params: &TilingParams,
    caption: Option<&str>,
    output: &Path,
    format: OutputFormat,
    pad_policy: PadPolicy,
    token: &CancelToken,
    progress: Option<&ProgressManager>,
) -> Result<TilingReport> {
    params.validate()?;
    ensure_output_empty(output)?;
    let files = list_image_files(input, "Input")?;
    if let Some(pm) = progress {
        pm.initialize(files.len());
    }

    token.reset();
    let mut tile_paths = Vec::new();
    let mut skipped = 0;

    for path in &files {
        if token.is_cancelled() {
            return Ok(TilingReport {
                outcome: BatchOutcome::Stopped,
                tile_paths,
                skipped,
            });
        }
        if let Some(pm) = progress {
            pm.start_file(path);
        }

        match tile_image(
            path,
            params,
            caption,
            output,
            format,
            pad_policy,
            token,
            &mut tile_paths,
        ) {
            Ok(BatchOutcome::Stopped) => {
                return Ok(TilingReport {
                    outcome: BatchOutcome::Stopped,
                    tile_paths,
                    skipped,
                });
            }
            Ok(BatchOutcome::Completed) => {}
            Err(e) => {
                warn(progress, &format!("Error tiling {}: {e}", path.display()));
                skipped += 1;
            }
        }

        if let Some(pm) = progress {
            pm.file_done();
        }
    }

    Ok(TilingReport {
        outcome: BatchOutcome::Completed,
        tile_paths,
        skipped,
    })
}

// Tiles a single image, appending written paths as they are produced so a
// stop or failure still reports the partial set.
fn tile_image(
    path: &Path,
    params: &TilingParams,
    caption: Option<&str>,
    output: &Path,
    format: OutputFormat,
    pad_policy: PadPolicy,
    token: &CancelToken,
    tile_paths: &mut Vec<PathBuf>,
) -> Result<BatchOutcome> {
    let img = image::open(path)
        .map_err(|e| TilePrepError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgb8();
    let (width, height) = img.dimensions();

    let tile_size = params.effective_tile_size(width, height);
    let step = compute_step(tile_size, params.overlap_ratio).ok_or_else(|| {
        invalid_parameter(
            "tile_size",
            &tile_size,
            &"derived tile size leaves no forward step",
        )
    })?;
    let grid = GridShape::compute(width, height, step, params.padding);

    let stem = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    let ext = format.extension();

    for j in 0..grid.vertical {
        if token.is_cancelled() {
            return Ok(BatchOutcome::Stopped);
        }
        for i in 0..grid.horizontal {
            if token.is_cancelled() {
                return Ok(BatchOutcome::Stopped);
            }

            let tile = cut_tile(&img, i, j, step, tile_size, pad_policy);

            let name = format!("{stem}{TILE_NAME_INFIX}{i}_{j}.{ext}");
            let dest = output.join(name);
            tile.save(&dest).map_err(|e| TilePrepError::ImageExport {
                path: dest.clone(),
                source: e,
            })?;
            tile_paths.push(dest);

            if let Some(text) = caption {
                let caption_path = output.join(format!("{stem}{TILE_NAME_INFIX}{i}_{j}.txt"));
                std::fs::write(&caption_path, text)
                    .map_err(|e| fs_error(&caption_path, "write file", e))?;
            }
        }
    }
    Ok(BatchOutcome::Completed)
}

/// Crop grid cell `(i, j)` out of an image and apply the padding policy
pub fn cut_tile(
    img: &RgbImage,
    i: u32,
    j: u32,
    step: u32,
    tile_size: u32,
    pad_policy: PadPolicy,
) -> RgbImage {
    let (width, height) = img.dimensions();
    let raw = TileBox::at(i, j, step, tile_size, width, height);
    let tile_box = match pad_policy {
        PadPolicy::AutoAdjust => raw.adjusted(tile_size, width, height),
        _ => raw,
    };

    let view = imageops::crop_imm(img, tile_box.left, tile_box.top, tile_box.width(), tile_box.height())
        .to_image();

    match pad_policy {
        PadPolicy::ExtendEdges if !tile_box.is_full(tile_size) => extend_edges(&view, tile_size),
        PadPolicy::PadToSquare if !tile_box.is_full(tile_size) => pad_to_square(&view, tile_size),
        _ => view,
    }
}

// Edge-replication padding: every pixel outside the source samples the
// nearest source pixel, never zero-fill.
fn extend_edges(tile: &RgbImage, tile_size: u32) -> RgbImage {
    let (width, height) = tile.dimensions();
    if width == 0 || height == 0 {
        return RgbImage::new(tile_size, tile_size);
    }
    ImageBuffer::from_fn(tile_size, tile_size, |x, y| {
        *tile.get_pixel(x.min(width - 1), y.min(height - 1))
    })
}

// Pastes the crop at the origin of a zero-initialized (black) canvas.
fn pad_to_square(tile: &RgbImage, tile_size: u32) -> RgbImage {
    let mut canvas = RgbImage::new(tile_size, tile_size);
    imageops::replace(&mut canvas, tile, 0, 0);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_edges_replicates_the_last_row_and_column() {
        let mut tile = RgbImage::new(2, 2);
        tile.put_pixel(1, 1, image::Rgb([200, 10, 30]));
        let padded = extend_edges(&tile, 4);

        assert_eq!(padded.dimensions(), (4, 4));
        assert_eq!(padded.get_pixel(3, 3), &image::Rgb([200, 10, 30]));
        assert_eq!(padded.get_pixel(1, 3), &image::Rgb([200, 10, 30]));
        assert_eq!(padded.get_pixel(0, 3), &image::Rgb([0, 0, 0]));
    }

    #[test]
    fn test_pad_to_square_leaves_uncovered_area_black() {
        let mut tile = RgbImage::new(2, 1);
        tile.put_pixel(0, 0, image::Rgb([255, 255, 255]));
        let padded = pad_to_square(&tile, 3);

        assert_eq!(padded.dimensions(), (3, 3));
        assert_eq!(padded.get_pixel(0, 0), &image::Rgb([255, 255, 255]));
        assert_eq!(padded.get_pixel(2, 2), &image::Rgb([0, 0, 0]));
    }
}
