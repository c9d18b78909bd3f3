//! Arrow data handling utilities
//!
//! Helpers for reading typed values out of record batches.

pub mod array_utils;
pub mod extractors;

pub use array_utils::{downcast_array, get_column};
pub use extractors::{NumericColumn, extract_subject_ids};
