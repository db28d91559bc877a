//! Pure tiling geometry
//!
//! This module contains the coordinate arithmetic shared by every batch
//! operation:
//! - Step and grid shape computation from tiling parameters
//! - Tile box coordinates, including undersized boundary boxes
//! - Compatibility classification and recommended crop sizes
//!
//! Nothing here performs I/O; all functions are deterministic over their
//! arguments, which keeps boundary-condition behavior unit-testable without
//! touching the filesystem.

/// Compatibility classification and recommended crop computation
pub mod crop;
/// Tiling parameters, grid shape, and tile box arithmetic
pub mod grid;

pub use crop::{Compatibility, center_offsets, recommended_crop};
pub use grid::{GridShape, TileBox, TilingParams};
