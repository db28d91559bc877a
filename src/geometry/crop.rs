//! Compatibility classification and recommended crop computation
//!
//! An image is compatible with a tile grid when both dimensions align to it
//! exactly, so extraction produces no partial edge tiles. The classifier is a
//! pure decision function; relocating files and writing recommendation
//! artifacts happens separately in the filter operation, keeping the
//! boundary-condition logic testable without a filesystem.

/// Grid alignment verdict for one image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    /// Both dimensions align to the tile grid with zero remainder
    Compatible,
    /// At least one dimension is below the tile size; no crop can repair
    /// the image and the recommendation echoes the original dimensions
    Undersized {
        /// Unchanged `(width, height)` of the image
        recommended: (u32, u32),
    },
    /// Dimensions exceed the tile size but leave a partial edge tile
    Misaligned {
        /// Largest grid-aligned `(width, height)` not exceeding the original
        recommended: (u32, u32),
    },
}

impl Compatibility {
    /// Classify an image against the tile grid
    pub fn classify(width: u32, height: u32, tile_size: u32, step: u32) -> Self {
        let recommended = recommended_crop(width, height, tile_size, step);
        if width < tile_size || height < tile_size {
            return Self::Undersized { recommended };
        }
        if step == 0 {
            return Self::Compatible;
        }
        if (width - tile_size) % step != 0 || (height - tile_size) % step != 0 {
            return Self::Misaligned { recommended };
        }
        Self::Compatible
    }

    /// Whether the image can be tiled as-is
    pub const fn is_compatible(&self) -> bool {
        matches!(self, Self::Compatible)
    }

    /// Recommended crop for incompatible images, `None` when compatible
    ///
    /// The undersized recommendation is a no-op echo of the original size;
    /// callers that need to distinguish it from an actionable crop match on
    /// the variant rather than comparing dimensions.
    pub const fn recommended(&self) -> Option<(u32, u32)> {
        match self {
            Self::Compatible => None,
            Self::Undersized { recommended } | Self::Misaligned { recommended } => {
                Some(*recommended)
            }
        }
    }
}

/// Largest dimensions not exceeding the original that the grid covers exactly
///
/// `new = floor((dim - tile_size) / step) * step + tile_size`, capped at the
/// original dimension, which is the size at which
/// `(dim - tile_size) % step == 0`. Images below the tile size on either
/// axis are returned unchanged, as are calls with a degenerate zero step.
/// The function is idempotent.
pub const fn recommended_crop(width: u32, height: u32, tile_size: u32, step: u32) -> (u32, u32) {
    if width < tile_size || height < tile_size || step == 0 {
        return (width, height);
    }
    let new_width = ((width - tile_size) / step) * step + tile_size;
    let new_height = ((height - tile_size) / step) * step + tile_size;
    (
        if new_width < width { new_width } else { width },
        if new_height < height { new_height } else { height },
    )
}

/// Top-left corner of a centered crop of `(new_width, new_height)`
///
/// Floor division biases the crop toward the top-left by one pixel when the
/// removed margin is odd.
pub const fn center_offsets(width: u32, height: u32, new_width: u32, new_height: u32) -> (u32, u32) {
    (
        width.saturating_sub(new_width) / 2,
        height.saturating_sub(new_height) / 2,
    )
}
