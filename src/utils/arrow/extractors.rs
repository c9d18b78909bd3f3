//! Field extraction utilities for Arrow record batches
//!
//! Survey codes and scores are all read as `Float64` and converted on
//! access; subject IDs are read as text and normalized.

use arrow::array::{Array, Float64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use crate::error::{PipelineError, Result};
use crate::models::codes::code_from_value;
use crate::models::wave::SubjectId;
use crate::utils::arrow::array_utils::{downcast_array, get_column};

/// A numeric column that may be absent from the batch
///
/// An absent column reads as null in every row.
#[derive(Debug, Clone)]
pub struct NumericColumn(Option<Float64Array>);

impl NumericColumn {
    /// Read a column as `Float64`
    pub fn from_batch(batch: &RecordBatch, column_name: &str) -> Result<Self> {
        let Some(array) = get_column(batch, column_name, &DataType::Float64)? else {
            return Ok(Self(None));
        };
        let values = downcast_array::<Float64Array>(&array, column_name, "Float64")?;
        Ok(Self(Some(values.clone())))
    }

    /// Whether the column exists in the batch
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Numeric value of a row; null, NaN and out-of-range rows are `None`
    #[must_use]
    pub fn value(&self, row: usize) -> Option<f64> {
        let values = self.0.as_ref()?;
        if row >= values.len() || values.is_null(row) {
            return None;
        }
        let value = values.value(row);
        value.is_finite().then_some(value)
    }

    /// Survey code of a row; non-integral values are `None`
    #[must_use]
    pub fn code(&self, row: usize) -> Option<i64> {
        self.value(row).and_then(code_from_value)
    }
}

/// Extract the subject ID of every row
///
/// The column is required; a null or blank cell yields `None` for that row.
pub fn extract_subject_ids(batch: &RecordBatch, column_name: &str) -> Result<Vec<Option<SubjectId>>> {
    let array = get_column(batch, column_name, &DataType::Utf8)?.ok_or_else(|| {
        PipelineError::Config(format!("Subject ID column '{column_name}' not loaded"))
    })?;
    let ids = downcast_array::<StringArray>(&array, column_name, "Utf8")?;

    Ok((0..ids.len())
        .map(|row| {
            if ids.is_null(row) {
                None
            } else {
                SubjectId::parse(ids.value(row))
            }
        })
        .collect())
}
