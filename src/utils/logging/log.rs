//! Stage logging
//!
//! One line per pipeline stage, with the wave and file it concerns, so a run
//! log reads as load → merge → enrich → write.

use std::path::Path;
use std::time::Duration;

use itertools::Itertools;

use crate::models::wave::Wave;

/// Log the start of a file-bound stage
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation}: {}", path.display());
}

/// Log a wave table that finished loading
///
/// # Arguments
/// * `wave` - Wave the file holds
/// * `path` - Input file
/// * `rows` - Rows read
/// * `columns` - Whitelisted columns found in the file
/// * `elapsed` - Time spent reading
pub fn log_wave_loaded(wave: Wave, path: &Path, rows: usize, columns: usize, elapsed: Duration) {
    log::info!(
        "Loaded {wave}: {rows} rows, {columns} columns from {} in {elapsed:?}",
        path.display()
    );
}

/// Log whitelisted optional columns a wave file lacks
///
/// Nothing is logged when no column was skipped.
pub fn log_skipped_columns(wave: Wave, path: &Path, skipped: &[String]) {
    if skipped.is_empty() {
        return;
    }
    log::warn!(
        "{wave} input {} lacks {} optional column(s), their derived fields will be null: {}",
        path.display(),
        skipped.len(),
        skipped.iter().join(", ")
    );
}

/// Log the output table once it has replaced the previous file
pub fn log_output_written(path: &Path, rows: usize, columns: usize, elapsed: Duration) {
    log::info!(
        "Wrote {rows} cohort rows x {columns} columns to {} in {elapsed:?}",
        path.display()
    );
}
