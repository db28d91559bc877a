//! Batch outcome reports returned by every operation
//!
//! Failures and early stops surface as data rather than panics: each report
//! records how the batch ended plus its counts, and its `Display` is the
//! human-readable status message shown at the UI boundary.

use std::fmt;
use std::path::PathBuf;

/// How a batch run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// The batch visited every file
    Completed,
    /// The cancel token stopped the batch early; outputs already produced
    /// remain on disk
    Stopped,
}

impl BatchOutcome {
    /// Whether the batch ran to completion
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

const STOPPED_MESSAGE: &str = "Process stopped by user.";

/// Result of a compatibility filter run
#[derive(Debug)]
pub struct FilterReport {
    /// How the batch ended
    pub outcome: BatchOutcome,
    /// Files relocated into the quarantine folder
    pub moved: usize,
    /// Files skipped after a per-file failure
    pub skipped: usize,
    /// Quarantine folder the incompatible files were moved into
    pub quarantine: PathBuf,
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            BatchOutcome::Stopped => f.write_str(STOPPED_MESSAGE),
            BatchOutcome::Completed => write!(
                f,
                "Moved {} incompatible images to: {}",
                self.moved,
                self.quarantine.display()
            ),
        }
    }
}

/// Result of an auto-crop run
#[derive(Debug)]
pub struct CropReport {
    /// How the batch ended
    pub outcome: BatchOutcome,
    /// Images cropped and saved into the destination
    pub cropped: usize,
    /// Files skipped after a per-file failure
    pub skipped: usize,
    /// Destination folder holding the cropped images
    pub destination: PathBuf,
}

impl fmt::Display for CropReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            BatchOutcome::Stopped => f.write_str(STOPPED_MESSAGE),
            BatchOutcome::Completed => write!(
                f,
                "Auto-cropped {} images into: {}",
                self.cropped,
                self.destination.display()
            ),
        }
    }
}

/// Result of a tile extraction run
#[derive(Debug)]
pub struct TilingReport {
    /// How the batch ended
    pub outcome: BatchOutcome,
    /// Every tile file written, in production order
    pub tile_paths: Vec<PathBuf>,
    /// Source images skipped after a per-file failure
    pub skipped: usize,
}

impl fmt::Display for TilingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            BatchOutcome::Stopped => f.write_str(STOPPED_MESSAGE),
            BatchOutcome::Completed => {
                write!(f, "Tiling complete! {} tiles created.", self.tile_paths.len())
            }
        }
    }
}
