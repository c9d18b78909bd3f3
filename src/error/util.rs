//! Utility functions for error handling
//!
//! File access helpers that attach the path and purpose to every failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{PipelineError, Result};

/// Check that an input file exists and is a regular file
///
/// # Arguments
/// * `path` - The path to check
/// * `purpose` - Why the file is needed (for error context)
pub fn ensure_input_file(path: &Path, purpose: &str) -> Result<()> {
    if !path.is_file() {
        return Err(PipelineError::FileNotFound {
            path: path.to_path_buf(),
            purpose: purpose.to_string(),
        });
    }
    Ok(())
}

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    ensure_input_file(path, purpose)?;

    fs::File::open(path).map_err(|e| match e.kind() {
        // The file can disappear between the existence check and the open
        io::ErrorKind::NotFound => PipelineError::FileNotFound {
            path: path.to_path_buf(),
            purpose: purpose.to_string(),
        },
        _ => PipelineError::io(path, e),
    })
}

/// Create (or truncate) a file for writing
pub fn safe_create_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| PipelineError::io(parent, e))?;
        }
    }
    fs::File::create(path).map_err(|e| PipelineError::io(path, e))
}
