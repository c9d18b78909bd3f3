//! Wave file loading
//!
//! Reads one wave file into a single record batch holding only the
//! whitelisted columns. Optional columns missing from the file are skipped
//! with a warning; a missing required column stops the run.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use arrow::compute::concat_batches;
use arrow::csv::reader::{Format, ReaderBuilder};
use arrow::datatypes::{Schema, SchemaRef};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ProjectionMask;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::util::{ensure_input_file, safe_open_file};
use crate::error::{PipelineError, Result};
use crate::models::wave::Wave;
use crate::schema::fields::{FieldPresence, SurveyField};
use crate::schema::variables::VariableCatalog;
use crate::utils::logging::{log_operation_start, log_skipped_columns, log_wave_loaded};

/// UTF-8 byte-order marker, as written by spreadsheet tools
const BOM: char = '\u{feff}';

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Apache Parquet
    Parquet,
}

impl InputFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("parquet") => Ok(Self::Parquet),
            _ => Err(PipelineError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// The whitelisted columns of one wave
#[derive(Debug, Clone)]
pub struct WaveTable<F: SurveyField> {
    /// Which wave the table holds
    pub wave: Wave,
    /// File the table was read from
    pub path: PathBuf,
    /// Selected columns, all rows
    pub batch: RecordBatch,
    /// Whitelisted fields found in the file
    pub presence: FieldPresence<F>,
}

impl<F: SurveyField> WaveTable<F> {
    /// Number of rows
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }
}

/// An opened input file whose schema is known but whose rows are unread
enum WaveSource {
    Csv { file: File, schema: SchemaRef },
    Parquet { builder: ParquetRecordBatchReaderBuilder<File> },
}

impl WaveSource {
    fn open(path: &Path, purpose: &str) -> Result<Self> {
        match InputFormat::from_path(path)? {
            InputFormat::Csv => {
                let mut file = safe_open_file(path, purpose)?;
                let format = Format::default().with_header(true);
                let (schema, _) = format.infer_schema(&mut file, None)?;
                // Reopen rather than seek so the reader starts at the header line
                let file = safe_open_file(path, purpose)?;
                Ok(Self::Csv {
                    file,
                    schema: Arc::new(strip_bom(&schema)),
                })
            }
            InputFormat::Parquet => {
                let file = safe_open_file(path, purpose)?;
                let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
                Ok(Self::Parquet { builder })
            }
        }
    }

    fn schema(&self) -> SchemaRef {
        match self {
            Self::Csv { schema, .. } => Arc::clone(schema),
            Self::Parquet { builder } => Arc::clone(builder.schema()),
        }
    }

    /// Read all rows of the projected columns into one batch
    fn read(self, projection: &[usize], batch_size: usize) -> Result<RecordBatch> {
        let (projected, batches) = match self {
            Self::Csv { file, schema } => {
                let projected = Arc::new(schema.project(projection)?);
                let reader = ReaderBuilder::new(schema)
                    .with_header(true)
                    .with_batch_size(batch_size)
                    .with_projection(projection.to_vec())
                    .build(file)?;
                let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;
                (projected, batches)
            }
            Self::Parquet { builder } => {
                let projected = Arc::new(builder.schema().project(projection)?);
                let mask = ProjectionMask::roots(builder.parquet_schema(), projection.iter().copied());
                let reader = builder
                    .with_projection(mask)
                    .with_batch_size(batch_size)
                    .build()?;
                let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;
                (projected, batches)
            }
        };

        let schema = batches.first().map_or(projected, RecordBatch::schema);
        Ok(concat_batches(&schema, &batches)?)
    }
}

/// Strip a byte-order marker from the first header name
fn strip_bom(schema: &Schema) -> Schema {
    let fields: Vec<_> = schema
        .fields()
        .iter()
        .map(|field| {
            let name = field.name().trim_start_matches(BOM);
            field.as_ref().clone().with_name(name)
        })
        .collect();
    Schema::new_with_metadata(fields, schema.metadata().clone())
}

/// Load the whitelisted columns of one wave file
///
/// # Arguments
///
/// * `wave` - Which wave the file holds
/// * `path` - Input file (`.csv` or `.parquet`)
/// * `fields` - Whitelisted fields to select
/// * `catalog` - Column names of the fields
/// * `batch_size` - Rows per batch while reading
///
/// # Errors
///
/// Fails if the file is missing or unreadable, or if a required field's
/// column is not in the file.
pub fn load_wave<F: SurveyField>(
    wave: Wave,
    path: &Path,
    fields: &[F],
    catalog: &VariableCatalog,
    batch_size: usize,
) -> Result<WaveTable<F>> {
    let start = Instant::now();
    log_operation_start(&format!("Loading {wave}"), path);

    let purpose = format!("{wave} input");
    let source = WaveSource::open(path, &purpose)?;
    let schema = source.schema();

    let mut projection = Vec::with_capacity(fields.len());
    let mut present = Vec::with_capacity(fields.len());
    let mut skipped = Vec::new();

    for &field in fields {
        let column = field.column_in(catalog, wave);
        match schema.index_of(column) {
            Ok(idx) => {
                projection.push(idx);
                present.push(field);
            }
            Err(_) if field.is_required() => {
                return Err(PipelineError::MissingColumn {
                    column: column.to_string(),
                    wave,
                    path: path.to_path_buf(),
                });
            }
            Err(_) => skipped.push(format!("{column} ({})", field.description())),
        }
    }

    log_skipped_columns(wave, path, &skipped);

    // Projections must be ascending and unique for the parquet reader
    projection.sort_unstable();
    projection.dedup();

    let batch = source.read(&projection, batch_size)?;
    log_wave_loaded(wave, path, batch.num_rows(), present.len(), start.elapsed());

    Ok(WaveTable {
        wave,
        path: path.to_path_buf(),
        batch,
        presence: FieldPresence::new(present),
    })
}

/// Check that every input file exists before any of them is parsed
pub fn ensure_inputs_exist<'a>(paths: impl IntoIterator<Item = (Wave, &'a Path)>) -> Result<()> {
    for (wave, path) in paths {
        ensure_input_file(path, &format!("{wave} input"))?;
        InputFormat::from_path(path)?;
    }
    Ok(())
}
