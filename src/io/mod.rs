//! Input/output: argument parsing, PNG export, progress and errors

/// Command-line parsing and batch orchestration
pub mod cli;
/// Limits and defaults
pub mod configuration;
/// Error type and result alias
pub mod error;
/// PNG export under code-derived file names
pub mod image;
/// Batch progress display
pub mod progress;
