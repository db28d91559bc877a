//! Constants and runtime defaults

/// Input extensions the batch operations recognize, lowercase
///
/// RAW formats are listed so their files participate in classification and
/// relocation; decoding them is delegated to the image codec and fails per
/// file (logged and skipped) when unsupported.
pub const RECOGNIZED_EXTENSIONS: [&str; 8] =
    ["png", "jpg", "jpeg", "heic", "cr2", "nef", "arw", "dng"];

/// Default tile edge length in pixels
pub const DEFAULT_TILE_SIZE: u32 = 512;

/// Default overlap between neighboring tiles as a fraction of the tile size
pub const DEFAULT_OVERLAP_RATIO: f64 = 0.5;

/// Default boundary margin in pixels
pub const DEFAULT_PADDING: u32 = 0;

/// Lines of the recommendation artifact written next to quarantined images
///
/// The first line carries the recommended `width x height`; the remainder is
/// fixed guidance text. Undersized images receive the same text with their
/// unchanged dimensions.
pub const RECOMMENDATION_GUIDANCE: [&str; 2] = [
    "Manually crop (preferably center-crop) to these dimensions for 1:1 tiling.",
    "If that removes important areas, consider a manual approach.",
];

/// Infix inserted between the source stem and the grid coordinates in tile
/// filenames
pub const TILE_NAME_INFIX: &str = "_tile_";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
