//! Batch image tiling and crop preparation for dataset curation
//!
//! The system partitions large source images into overlapping fixed-size
//! tiles, quarantines images whose dimensions cannot be tiled cleanly,
//! and repairs them by center-cropping to the nearest grid-aligned size.

#![forbid(unsafe_code)]

/// Pure tiling geometry: grids, tile boxes, and recommended crops
pub mod geometry;
/// Input/output, CLI, and error handling
pub mod io;
/// Batch operations: filtering, auto-cropping, and tile extraction
pub mod ops;

pub use io::error::{Result, TilePrepError};
