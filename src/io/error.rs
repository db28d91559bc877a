//! Error types for batch operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all batch operations
///
/// Only precondition violations and whole-batch failures surface through
/// this type; per-file problems inside a running batch are logged and
/// skipped so one corrupt image never aborts the run.
#[derive(Debug)]
pub enum TilePrepError {
    /// Failed to read an image or its header from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a produced image to disk
    ImageExport {
        /// Path where the save was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Tiling parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A folder the operation requires does not exist
    MissingFolder {
        /// Role of the folder in the operation
        role: &'static str,
        /// Path that was expected to be a directory
        path: PathBuf,
    },

    /// A destination folder must be empty before the batch starts
    OutputNotEmpty {
        /// Path of the non-empty destination
        path: PathBuf,
    },
}

impl fmt::Display for TilePrepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MissingFolder { role, path } => {
                write!(f, "{role} folder does not exist: {}", path.display())
            }
            Self::OutputNotEmpty { path } => {
                write!(f, "Output folder is not empty: {}", path.display())
            }
        }
    }
}

impl std::error::Error for TilePrepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for batch operation results
pub type Result<T> = std::result::Result<T, TilePrepError>;

impl From<image::ImageError> for TilePrepError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TilePrepError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilePrepError {
    TilePrepError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error carrying the affected path and operation
pub fn fs_error(path: &std::path::Path, operation: &'static str, source: std::io::Error) -> TilePrepError {
    TilePrepError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_carry_path_and_reason() {
        let err = TilePrepError::OutputNotEmpty {
            path: PathBuf::from("/tmp/tiles"),
        };
        assert_eq!(err.to_string(), "Output folder is not empty: /tmp/tiles");

        let err = invalid_parameter("overlap_ratio", &1.5, &"overlap ratio must lie in [0, 1)");
        assert!(err.to_string().contains("overlap_ratio"));
        assert!(err.to_string().contains("1.5"));
    }
}
