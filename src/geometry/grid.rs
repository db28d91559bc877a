//! Tiling parameters, grid shape, and tile box arithmetic

use crate::io::error::{Result, invalid_parameter};

/// Parameters controlling how an image is partitioned into tiles
#[derive(Debug, Clone, Copy)]
pub struct TilingParams {
    /// Edge length of a square tile in pixels
    pub tile_size: u32,
    /// Fraction of the tile size shared with the neighboring tile, in `[0, 1)`
    pub overlap_ratio: f64,
    /// Boundary margin in pixels subtracted from the image before counting tiles
    pub padding: u32,
    /// When nonzero, derive the tile size per image so the grid holds roughly
    /// this many tiles regardless of aspect ratio
    pub num_tiles: u32,
}

impl TilingParams {
    /// Validate the parameter set before starting a batch
    ///
    /// # Errors
    ///
    /// Returns [`crate::TilePrepError::InvalidParameter`] when the tile size
    /// is zero or the overlap ratio falls outside `[0, 1)`.
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &"tile size must be at least one pixel",
            ));
        }
        if !self.overlap_ratio.is_finite() || !(0.0..1.0).contains(&self.overlap_ratio) {
            return Err(invalid_parameter(
                "overlap_ratio",
                &self.overlap_ratio,
                &"overlap ratio must lie in [0, 1)",
            ));
        }
        Ok(())
    }

    /// Step between consecutive tile origins for the configured tile size
    ///
    /// # Errors
    ///
    /// Returns [`crate::TilePrepError::InvalidParameter`] when the parameters
    /// fail validation or the derived step degenerates to zero.
    pub fn step(&self) -> Result<u32> {
        self.validate()?;
        compute_step(self.tile_size, self.overlap_ratio).ok_or_else(|| {
            invalid_parameter(
                "overlap_ratio",
                &self.overlap_ratio,
                &"overlap leaves no forward step between tiles",
            )
        })
    }

    /// Tile size for a specific image, honoring the `num_tiles` override
    ///
    /// When `num_tiles` is nonzero the configured tile size is replaced by
    /// `min(width, height) / floor(sqrt(num_tiles))`, which yields a roughly
    /// constant tile count independent of aspect ratio.
    pub fn effective_tile_size(&self, width: u32, height: u32) -> u32 {
        if self.num_tiles == 0 {
            return self.tile_size;
        }
        let root = (f64::from(self.num_tiles).sqrt() as u32).max(1);
        width.min(height) / root
    }
}

/// Step between consecutive tile origins
///
/// `step = tile_size - floor(overlap_ratio * tile_size)`. Returns `None`
/// when the step degenerates to zero, which would otherwise loop forever.
pub fn compute_step(tile_size: u32, overlap_ratio: f64) -> Option<u32> {
    let overlap = (overlap_ratio * f64::from(tile_size)).floor() as u32;
    let step = tile_size.saturating_sub(overlap);
    (step > 0).then_some(step)
}

/// Number of tile rows and columns an image yields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Tile count along the horizontal axis
    pub horizontal: u32,
    /// Tile count along the vertical axis
    pub vertical: u32,
}

impl GridShape {
    /// Grid with no cells
    pub const EMPTY: Self = Self {
        horizontal: 0,
        vertical: 0,
    };

    /// Compute the grid shape for an image
    ///
    /// Each count is `max(0, (dimension - padding) / step)`. An image smaller
    /// than the padding yields an empty grid and therefore no tiles; there is
    /// no single-tile fallback. A zero step also yields an empty grid rather
    /// than dividing by zero.
    pub const fn compute(width: u32, height: u32, step: u32, padding: u32) -> Self {
        if step == 0 {
            return Self::EMPTY;
        }
        Self {
            horizontal: width.saturating_sub(padding) / step,
            vertical: height.saturating_sub(padding) / step,
        }
    }

    /// Whether the grid holds no cells at all
    pub const fn is_empty(&self) -> bool {
        self.horizontal == 0 || self.vertical == 0
    }
}

/// Pixel rectangle of a single tile within its source image
///
/// Boundary tiles at the right and bottom edges may be narrower than the
/// configured tile size; that shortfall is what the padding policies act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBox {
    /// Left edge, inclusive
    pub left: u32,
    /// Top edge, inclusive
    pub top: u32,
    /// Right edge, exclusive, clamped to the image width
    pub right: u32,
    /// Bottom edge, exclusive, clamped to the image height
    pub bottom: u32,
}

impl TileBox {
    /// Box for grid cell `(i, j)` where `i` indexes columns and `j` rows
    pub const fn at(i: u32, j: u32, step: u32, tile_size: u32, width: u32, height: u32) -> Self {
        let left = i * step;
        let top = j * step;
        Self {
            left,
            top,
            right: min(left + tile_size, width),
            bottom: min(top + tile_size, height),
        }
    }

    /// Shift an undersized box backward so it touches the far image boundary
    ///
    /// Used by the auto-adjust policy: each axis shorter than `tile_size` is
    /// re-anchored at `max(dimension - tile_size, 0)`, trading extra overlap
    /// with the preceding tile for a full-size output. An image narrower than
    /// the tile size itself stays clamped to the image bounds.
    pub const fn adjusted(self, tile_size: u32, width: u32, height: u32) -> Self {
        let mut result = self;
        if result.right - result.left < tile_size {
            result.left = width.saturating_sub(tile_size);
            result.right = min(result.left + tile_size, width);
        }
        if result.bottom - result.top < tile_size {
            result.top = height.saturating_sub(tile_size);
            result.bottom = min(result.top + tile_size, height);
        }
        result
    }

    /// Box width in pixels
    pub const fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Box height in pixels
    pub const fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Whether the box already spans a full `tile_size` square
    pub const fn is_full(&self, tile_size: u32) -> bool {
        self.width() == tile_size && self.height() == tile_size
    }
}

// u32::min is not const-callable through the trait method
const fn min(a: u32, b: u32) -> u32 {
    if a < b { a } else { b }
}
