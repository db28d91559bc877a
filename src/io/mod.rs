//! Input/output, CLI, and error handling
//!
//! This module contains everything that touches the outside world:
//! - Command-line argument parsing and dispatch
//! - Folder listing, extension recognition, and output-folder guards
//! - Progress display for batch runs
//! - The crate-wide error type

/// Command-line interface and batch dispatch
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types for batch operations
pub mod error;
/// Folder listing and precondition guards
pub mod folder;
/// Progress display for batch operations
pub mod progress;
