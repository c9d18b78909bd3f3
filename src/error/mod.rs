//! Error handling for the NEET panel pipeline.
//!
//! Every fatal condition is raised during loading, before any merge or
//! derivation work starts. Field-level problems never surface here; they
//! degrade the affected derived value to null or a sentinel label instead.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

use crate::models::wave::Wave;

/// Errors that abort a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// An input file does not exist
    #[error("Input file not found: {} (needed for {purpose})", .path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
        /// What the file was needed for
        purpose: String,
    },

    /// Error opening, reading or writing a file
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// Path of the file involved
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// A required column is absent from a wave's input
    #[error("Required column '{column}' missing from {wave} input {}", .path.display())]
    MissingColumn {
        /// Name of the missing column
        column: String,
        /// Wave whose input lacks the column
        wave: Wave,
        /// File that was read
        path: PathBuf,
    },

    /// Input file extension is neither CSV nor Parquet
    #[error("Unsupported input format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Parquet error
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    /// Wrap an IO error together with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error was caused by a missing input file
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
