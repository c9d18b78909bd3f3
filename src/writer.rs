//! Output table
//!
//! The output is described by a static column table: each column has a name
//! and a typed extractor over [`EnrichedRecord`]. The table is materialized
//! as an arrow record batch and written with arrow's CSV writer, prefixed
//! with a UTF-8 byte-order marker so spreadsheet tools detect the encoding.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::csv::WriterBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use log::debug;

use crate::config::PipelineVariant;
use crate::error::util::safe_create_file;
use crate::error::{PipelineError, Result};
use crate::models::codes::{Label, Locale, Sentinel};
use crate::models::enriched::EnrichedRecord;
use crate::models::wave::{CareerItem, Wave};
use crate::schema::variables::VariableCatalog;
use crate::utils::logging::{log_operation_start, log_output_written};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Typed value extractor of an output column
#[derive(Clone, Copy)]
pub enum ColumnValues {
    /// Text, possibly localized
    Text(fn(&EnrichedRecord, Locale) -> Option<String>),
    /// Integer codes and counts
    Int(fn(&EnrichedRecord) -> Option<i64>),
    /// Scores and amounts
    Float(fn(&EnrichedRecord) -> Option<f64>),
    /// Flags
    Bool(fn(&EnrichedRecord) -> Option<bool>),
}

impl ColumnValues {
    fn data_type(self) -> DataType {
        match self {
            Self::Text(_) => DataType::Utf8,
            Self::Int(_) => DataType::Int64,
            Self::Float(_) => DataType::Float64,
            Self::Bool(_) => DataType::Boolean,
        }
    }

    fn to_array(self, records: &[EnrichedRecord], locale: Locale) -> ArrayRef {
        match self {
            Self::Text(extract) => Arc::new(
                records
                    .iter()
                    .map(|record| extract(record, locale))
                    .collect::<StringArray>(),
            ),
            Self::Int(extract) => Arc::new(Int64Array::from(
                records.iter().map(extract).collect::<Vec<_>>(),
            )),
            Self::Float(extract) => Arc::new(Float64Array::from(
                records.iter().map(extract).collect::<Vec<_>>(),
            )),
            Self::Bool(extract) => Arc::new(BooleanArray::from(
                records.iter().map(extract).collect::<Vec<_>>(),
            )),
        }
    }
}

/// One column of the output table
#[derive(Clone)]
pub struct OutputColumn {
    /// Header name
    pub name: String,
    /// Value extractor
    pub values: ColumnValues,
}

impl OutputColumn {
    fn new(name: impl Into<String>, values: ColumnValues) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    fn text(name: impl Into<String>, extract: fn(&EnrichedRecord, Locale) -> Option<String>) -> Self {
        Self::new(name, ColumnValues::Text(extract))
    }

    fn int(name: impl Into<String>, extract: fn(&EnrichedRecord) -> Option<i64>) -> Self {
        Self::new(name, ColumnValues::Int(extract))
    }

    fn float(name: impl Into<String>, extract: fn(&EnrichedRecord) -> Option<f64>) -> Self {
        Self::new(name, ColumnValues::Float(extract))
    }
}

fn label(value: Option<&'static str>) -> Option<String> {
    value.map(str::to_string)
}

/// The output columns of a variant, in header order
///
/// Source columns keep their survey names from the catalog; derived columns
/// have fixed names.
#[must_use]
pub fn output_columns(variant: PipelineVariant, catalog: &VariableCatalog) -> Vec<OutputColumn> {
    let wave1 = &catalog.wave1;
    let mut columns = vec![
        OutputColumn::text(&catalog.subject_id, |r, _| {
            Some(r.panel.subject_id().to_string())
        }),
        OutputColumn::int(&wave1.gender, |r| r.panel.wave1.gender),
        OutputColumn::int(&wave1.birth_year, |r| r.panel.wave1.birth_year),
        OutputColumn::int(&wave1.econ_activity, |r| r.panel.econ_activity(Wave::First)),
        OutputColumn::int(&wave1.student_status, |r| r.panel.student_status(Wave::First)),
        OutputColumn::int(&wave1.education, |r| r.panel.wave1.education),
        OutputColumn::int(&wave1.region, |r| r.panel.wave1.region),
        OutputColumn::int(&wave1.health, |r| r.panel.wave1.health),
        OutputColumn::int(&wave1.had_experience, |r| r.panel.wave1.had_experience),
        OutputColumn::int(&wave1.experience_type, |r| r.panel.wave1.experience_type),
        OutputColumn::int(&wave1.career_guidance, |r| r.panel.wave1.career_guidance),
        OutputColumn::float(wave1.career.column(CareerItem::PlanClarity), |r| {
            r.panel.career_score(Wave::First, CareerItem::PlanClarity)
        }),
        OutputColumn::int(&catalog.wave2.econ_activity, |r| r.panel.econ_activity(Wave::Second)),
        OutputColumn::int(&catalog.wave2.student_status, |r| r.panel.student_status(Wave::Second)),
        OutputColumn::int(&catalog.wave3.econ_activity, |r| r.panel.econ_activity(Wave::Third)),
        OutputColumn::int(&catalog.wave3.student_status, |r| r.panel.student_status(Wave::Third)),
        OutputColumn::new("neet_w1", ColumnValues::Bool(|r| Some(r.neet_w1))),
        OutputColumn::text("outcome", |r, locale| Some(r.outcome.label(locale).to_string())),
        OutputColumn::int("got_job_flag", |r| Some(i64::from(r.got_job_flag))),
        OutputColumn::text("gender_label", |r, locale| label(r.gender.label(locale))),
        OutputColumn::int("age", |r| r.age),
        OutputColumn::text("edu_label", |r, locale| label(r.education.label(locale))),
        OutputColumn::text("region_label", |r, locale| label(r.region.label(locale))),
        OutputColumn::text("health_label", |r, locale| label(r.health.label(locale))),
        OutputColumn::text("exp_type", |r, locale| Some(r.experience.label(locale).to_string())),
        OutputColumn::text("career_guidance", |r, locale| label(r.career_guidance.label(locale))),
        OutputColumn::float("career_plan_score", |r| r.career_plan_score),
        OutputColumn::int("waves_observed", |r| Some(i64::from(r.waves_observed()))),
    ];

    if variant == PipelineVariant::Extended {
        columns.extend([
            OutputColumn::float("self_efficacy", |r| r.self_efficacy),
            OutputColumn::float("career_plan_clarity_avg", |r| {
                r.career_averages.get(CareerItem::PlanClarity)
            }),
            OutputColumn::float("decision_difficulty_avg", |r| {
                r.career_averages.get(CareerItem::DecisionDifficulty)
            }),
            OutputColumn::float("indecision_avg", |r| r.career_averages.get(CareerItem::Indecision)),
            OutputColumn::float("unknown_aptitude_avg", |r| {
                r.career_averages.get(CareerItem::UnknownAptitude)
            }),
            OutputColumn::text("father_edu_label", |r, locale| label(r.father_education.label(locale))),
            OutputColumn::text("mother_edu_label", |r, locale| label(r.mother_education.label(locale))),
            OutputColumn::text("parent_edu_label", |r, locale| {
                r.parent_education.map(|level| level.label(locale).to_string())
            }),
            OutputColumn::float("financial_assets", |r| r.financial_assets),
            OutputColumn::text("job_search_method", |r, locale| {
                Some(r.search_method.label_or(Sentinel::NoResponse, locale).to_string())
            }),
            OutputColumn::text("job_search_difficulty", |r, locale| {
                Some(r.search_difficulty.label_or(Sentinel::NotApplicable, locale).to_string())
            }),
            OutputColumn::float("job_search_months", |r| r.search_duration),
            OutputColumn::float("job_search_count", |r| r.search_count),
        ]);
    }

    columns
}

/// Materialize the output table
pub fn to_record_batch(
    records: &[EnrichedRecord],
    columns: &[OutputColumn],
    locale: Locale,
) -> Result<RecordBatch> {
    let fields: Vec<Field> = columns
        .iter()
        .map(|column| Field::new(&column.name, column.values.data_type(), true))
        .collect();
    let arrays: Vec<ArrayRef> = columns
        .iter()
        .map(|column| column.values.to_array(records, locale))
        .collect();

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?)
}

/// Sibling path the table is written to before it replaces the target
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| "output".into(), |name| name.to_string_lossy().into_owned());
    path.with_file_name(format!(".{name}.tmp"))
}

fn write_csv(batch: &RecordBatch, path: &Path) -> Result<()> {
    let file = safe_create_file(path)?;
    let mut out = BufWriter::new(file);
    out.write_all(UTF8_BOM).map_err(|e| PipelineError::io(path, e))?;

    let mut writer = WriterBuilder::new().with_header(true).build(out);
    writer.write(batch)?;

    let mut out = writer.into_inner();
    out.flush().map_err(|e| PipelineError::io(path, e))?;
    Ok(())
}

/// Write the output table, replacing any existing file
///
/// The table is written to a temporary sibling file which is then renamed
/// over `path`, so an interrupted run leaves the previous output intact.
pub fn write_output(batch: &RecordBatch, path: &Path) -> Result<()> {
    let start = Instant::now();
    log_operation_start("Writing output table", path);

    let temp = temp_path(path);
    debug!("Writing to temporary file {}", temp.display());

    if let Err(err) = write_csv(batch, &temp) {
        let _ = fs::remove_file(&temp);
        return Err(err);
    }
    fs::rename(&temp, path).map_err(|e| PipelineError::io(path, e))?;

    log_output_written(path, batch.num_rows(), batch.num_columns(), start.elapsed());
    Ok(())
}
