//! Batch operations over folders of images
//!
//! Each operation is stateless and independently invokable: the
//! compatibility filter quarantines images the grid cannot cover cleanly,
//! the auto-cropper repairs quarantined images by center-cropping, and the
//! tile extractor produces the final tile set. All three take an explicit
//! [`CancelToken`](cancel::CancelToken), clear it at batch start, and poll
//! it at coarse granularity.

/// Center-crop repair of quarantined images
pub mod autocrop;
/// Cooperative cancellation for running batches
pub mod cancel;
/// Compatibility classification and quarantine relocation
pub mod filter;
/// Batch outcome reports returned by every operation
pub mod report;
/// Tile extraction with boundary padding policies
pub mod tiling;

pub use autocrop::auto_crop;
pub use cancel::CancelToken;
pub use filter::filter_incompatible;
pub use report::{BatchOutcome, CropReport, FilterReport, TilingReport};
pub use tiling::{OutputFormat, PadPolicy, extract_tiles};
