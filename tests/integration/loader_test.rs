use std::fs::File;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, Int64Array};
use arrow::datatypes::{Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use neet_panel::loader::load_wave;
use neet_panel::models::{CareerItem, Wave1Record};
use neet_panel::schema::fields::{FollowUpField, Wave1Field};
use neet_panel::schema::variables::VariableCatalog;
use neet_panel::{PipelineError, PipelineVariant, Wave, build_dataset};

use crate::utils::{Fixture, WAVE1_BASIC, WAVE2_BASIC};

fn write_parquet(path: &std::path::Path, columns: Vec<(&str, ArrayRef)>) {
    let fields: Vec<Field> = columns
        .iter()
        .map(|(name, array)| Field::new(*name, array.data_type().clone(), true))
        .collect();
    let batch = RecordBatch::try_new(
        Arc::new(Schema::new(fields)),
        columns.into_iter().map(|(_, array)| array).collect(),
    )
    .expect("build batch");

    let file = File::create(path).expect("create parquet file");
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None).expect("parquet writer");
    writer.write(&batch).expect("write batch");
    writer.close().expect("close writer");
}

#[test]
fn test_parquet_follow_up_wave() {
    let mut fixture = Fixture::new(WAVE1_BASIC, WAVE2_BASIC, "");
    let wave3 = fixture.dir.path().join("YP2021_w03.parquet");
    write_parquet(
        &wave3,
        vec![
            ("sampid", Arc::new(Int64Array::from(vec![1, 2])) as ArrayRef),
            ("w03ecoact", Arc::new(Int64Array::from(vec![Some(1), None])) as ArrayRef),
            ("w03student", Arc::new(Int64Array::from(vec![2, 2])) as ArrayRef),
            ("y03e501", Arc::new(Float64Array::from(vec![4.0, 2.0])) as ArrayRef),
        ],
    );
    fixture.config.wave3_path = wave3;

    let dataset = build_dataset(&fixture.config).expect("build dataset");

    assert_eq!(dataset.records.len(), 1);
    assert!(dataset.records[0].got_job());
}

#[test]
fn test_unparsable_codes_become_null() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("w1.csv");
    std::fs::write(&path, "sampid,w01ecoact,w01student,gender\n1,3,2,abc\n2,x,2,1\n").expect("write");

    let table = load_wave(
        Wave::First,
        &path,
        &Wave1Field::whitelist(PipelineVariant::Basic),
        &VariableCatalog::default(),
        16,
    )
    .expect("load wave 1");
    let records = Wave1Record::from_table(&table, &VariableCatalog::default()).expect("records");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].gender, None);
    assert_eq!(records[1].status.econ_activity, None);
    assert_eq!(records[1].gender, Some(1));
}

#[test]
fn test_follow_up_career_items_are_optional() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("w2.csv");
    std::fs::write(&path, "sampid,w02ecoact,w02student,y02e501\n1,1,2,3\n").expect("write");

    let table = load_wave(
        Wave::Second,
        &path,
        &FollowUpField::whitelist(PipelineVariant::Extended),
        &VariableCatalog::default(),
        16,
    )
    .expect("load wave 2");

    assert_eq!(table.num_rows(), 1);
    assert!(table.presence.contains(FollowUpField::EconActivity));
    assert!(table.presence.contains(FollowUpField::Career(CareerItem::PlanClarity)));
    assert!(!table.presence.contains(FollowUpField::Career(CareerItem::Indecision)));
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let mut fixture = Fixture::new(WAVE1_BASIC, WAVE2_BASIC, "");
    let xlsx = fixture.dir.path().join("YP2021_w03.xlsx");
    std::fs::write(&xlsx, "not a table").expect("write");
    fixture.config.wave3_path = xlsx;

    let err = build_dataset(&fixture.config).unwrap_err();
    assert!(matches!(err, PipelineError::UnsupportedFormat(_)));
}
