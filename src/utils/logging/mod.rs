pub mod log;

pub use self::log::{log_operation_start, log_output_written, log_skipped_columns, log_wave_loaded};
