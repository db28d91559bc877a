//! Command-line interface for the batch preparation operations

use crate::geometry::TilingParams;
use crate::io::configuration::{DEFAULT_OVERLAP_RATIO, DEFAULT_PADDING, DEFAULT_TILE_SIZE};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::ops::cancel::CancelToken;
use crate::ops::tiling::{OutputFormat, PadPolicy};
use crate::ops::{auto_crop, extract_tiles, filter_incompatible};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tileprep")]
#[command(
    version,
    about = "Batch image tiling and crop preparation for dataset curation"
)]
/// Command-line arguments for the batch preparation tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// The batch operations exposed on the command line
#[derive(Subcommand)]
pub enum Command {
    /// Quarantine images whose dimensions the tile grid cannot cover exactly
    Filter(FilterArgs),
    /// Center-crop quarantined images to their recommended grid-aligned size
    Autocrop(AutocropArgs),
    /// Extract the full tile set from a folder of images
    Tile(TileArgs),
}

/// Tiling parameters shared by every operation
#[derive(Args)]
pub struct GridArgs {
    /// Tile edge length in pixels
    #[arg(short = 's', long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Overlap between neighboring tiles as a fraction of the tile size
    #[arg(short, long, default_value_t = DEFAULT_OVERLAP_RATIO)]
    pub overlap: f64,

    /// Boundary margin in pixels
    #[arg(short, long, default_value_t = DEFAULT_PADDING)]
    pub padding: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl GridArgs {
    const fn params(&self, num_tiles: u32) -> TilingParams {
        TilingParams {
            tile_size: self.tile_size,
            overlap_ratio: self.overlap,
            padding: self.padding,
            num_tiles,
        }
    }

    fn progress(&self) -> Option<ProgressManager> {
        (!self.quiet).then(ProgressManager::new)
    }
}

/// Arguments for the compatibility filter
#[derive(Args)]
pub struct FilterArgs {
    /// Folder of source images to classify
    pub input: PathBuf,

    /// Folder that receives incompatible images and their recommendations
    pub quarantine: PathBuf,

    /// Shared tiling parameters
    #[command(flatten)]
    pub grid: GridArgs,
}

/// Arguments for the auto-cropper
#[derive(Args)]
pub struct AutocropArgs {
    /// Folder of previously quarantined images
    pub quarantine: PathBuf,

    /// Empty folder that receives the cropped images
    pub cropped: PathBuf,

    /// Shared tiling parameters
    #[command(flatten)]
    pub grid: GridArgs,
}

/// Arguments for the tile extractor
#[derive(Args)]
pub struct TileArgs {
    /// Folder of source images to tile
    pub input: PathBuf,

    /// Empty folder that receives the tiles
    pub output: PathBuf,

    /// Shared tiling parameters
    #[command(flatten)]
    pub grid: GridArgs,

    /// Derive the tile size per image to target roughly this many tiles
    #[arg(short, long, default_value_t = 0)]
    pub num_tiles: u32,

    /// Caption written to a sibling text file next to every tile
    #[arg(short, long)]
    pub caption: Option<String>,

    /// Output image encoding
    #[arg(short, long, value_enum, default_value_t)]
    pub format: FormatArg,

    /// Boundary tile normalization policy
    #[arg(long, value_enum, default_value_t)]
    pub pad_policy: PadPolicyArg,
}

/// Output encoding choices, `none` falling back to PNG
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum FormatArg {
    /// JPEG encoding
    Jpg,
    /// PNG encoding
    Png,
    /// No explicit format; tiles are saved as PNG
    #[default]
    None,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Jpg => Self::Jpg,
            FormatArg::Png | FormatArg::None => Self::Png,
        }
    }
}

/// Boundary padding choices
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum PadPolicyArg {
    /// Save boundary tiles at their natural size
    #[default]
    None,
    /// Replicate edge pixels outward to the full tile size
    ExtendEdges,
    /// Shift boundary boxes backward to keep tiles full-size
    AutoAdjust,
    /// Paste boundary tiles onto a black square canvas
    PadToSquare,
}

impl From<PadPolicyArg> for PadPolicy {
    fn from(arg: PadPolicyArg) -> Self {
        match arg {
            PadPolicyArg::None => Self::None,
            PadPolicyArg::ExtendEdges => Self::ExtendEdges,
            PadPolicyArg::AutoAdjust => Self::AutoAdjust,
            PadPolicyArg::PadToSquare => Self::PadToSquare,
        }
    }
}

impl Cli {
    /// Run the selected operation and print its status message
    ///
    /// # Errors
    ///
    /// Returns an error when a precondition is violated before any work
    /// starts; per-file failures inside the batch are logged and skipped.
    // Allow print for user feedback with the final status message
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let token = CancelToken::new();
        match &self.command {
            Command::Filter(args) => {
                let progress = args.grid.progress();
                let report = filter_incompatible(
                    &args.input,
                    &args.quarantine,
                    &args.grid.params(0),
                    &token,
                    progress.as_ref(),
                )?;
                if let Some(pm) = progress {
                    pm.finish();
                }
                println!("{report}");
            }
            Command::Autocrop(args) => {
                let progress = args.grid.progress();
                let report = auto_crop(
                    &args.quarantine,
                    &args.cropped,
                    &args.grid.params(0),
                    &token,
                    progress.as_ref(),
                )?;
                if let Some(pm) = progress {
                    pm.finish();
                }
                println!("{report}");
            }
            Command::Tile(args) => {
                let progress = args.grid.progress();
                let caption = args.caption.as_deref().filter(|text| !text.is_empty());
                let report = extract_tiles(
                    &args.input,
                    &args.grid.params(args.num_tiles),
                    caption,
                    &args.output,
                    args.format.into(),
                    args.pad_policy.into(),
                    &token,
                    progress.as_ref(),
                )?;
                if let Some(pm) = progress {
                    pm.finish();
                }
                println!("{report}");
            }
        }
        Ok(())
    }
}
