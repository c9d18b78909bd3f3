//! Utilities for working with Arrow arrays.
//!
//! Survey files arrive with whatever types the CSV schema inference or the
//! Parquet writer chose, so columns are cast to the type a caller expects
//! before values are read.

use arrow::array::{Array, ArrayRef};
use arrow::compute::kernels::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use log::debug;

use crate::error::{PipelineError, Result};

/// Get a column from a record batch, cast to the expected type
///
/// The cast is "safe": values that cannot be represented in the target type
/// (for example the text `"n/a"` in a numeric column) become null instead of
/// failing the whole column.
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `column_name` - The name of the column to extract
/// * `expected_type` - The data type the caller wants
///
/// # Returns
///
/// * `Ok(Some(ArrayRef))` - The column array (converted if necessary) if found
/// * `Ok(None)` - If the column is not in the batch
/// * `Err(PipelineError)` - If arrow has no cast between the two types
pub fn get_column(
    batch: &RecordBatch,
    column_name: &str,
    expected_type: &DataType,
) -> Result<Option<ArrayRef>> {
    let Ok(idx) = batch.schema().index_of(column_name) else {
        return Ok(None);
    };

    let column = batch.column(idx);
    let actual_type = column.data_type();
    if actual_type == expected_type {
        return Ok(Some(column.clone()));
    }

    debug!("Casting column '{column_name}' from {actual_type:?} to {expected_type:?}");
    let converted = cast::cast(column, expected_type)?;
    Ok(Some(converted))
}

/// Downcast a column to a specific array type with clear error messages
///
/// # Type Parameters
///
/// * `A` - The target array type to downcast to
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    expected_type_name: &str,
) -> Result<&'a A> {
    array.as_any().downcast_ref::<A>().ok_or_else(|| {
        PipelineError::Config(format!(
            "Column '{column_name}' could not be read as {expected_type_name}"
        ))
    })
}
