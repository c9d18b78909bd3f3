use std::fs;

use neet_panel::{Locale, PipelineError, PipelineVariant, build_dataset, run_pipeline};

use crate::utils::{Fixture, WAVE1_BASIC, WAVE2_BASIC, WAVE3_BASIC, read_output};

#[test]
fn test_end_to_end_neet_subject_finds_employment() {
    let fixture = Fixture::new(WAVE1_BASIC, WAVE2_BASIC, WAVE3_BASIC);

    let summary = run_pipeline(&fixture.config, &fixture.output()).expect("pipeline run");

    assert_eq!(summary.wave1_subjects, 2);
    assert_eq!(summary.neet_subjects, 1);
    assert_eq!(summary.employed_subjects, 1);

    let table = read_output(&fixture.output());
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.value(0, "sampid"), "1");
    assert_eq!(table.value(0, "neet_w1"), "true");
    assert_eq!(table.value(0, "outcome"), "EMPLOYED");
    assert_eq!(table.value(0, "got_job_flag"), "1");
    assert_eq!(table.value(0, "age"), "23");
    assert_eq!(table.value(0, "gender_label"), "male");
    assert_eq!(table.value(0, "edu_label"), "high school");
    assert_eq!(table.value(0, "region_label"), "Seoul");
    assert_eq!(table.value(0, "health_label"), "good");
    assert_eq!(table.value(0, "waves_observed"), "3");
}

#[test]
fn test_non_neet_subjects_are_excluded() {
    let fixture = Fixture::new(WAVE1_BASIC, WAVE2_BASIC, WAVE3_BASIC);
    run_pipeline(&fixture.config, &fixture.output()).expect("pipeline run");

    let table = read_output(&fixture.output());
    let sampid = table.column("sampid");
    assert!(table.rows.iter().all(|row| row[sampid] != "2"));
}

#[test]
fn test_attrition_counts_as_not_employed() {
    let wave1 = "sampid,w01ecoact,w01student\n10,2,2\n11,3,2\n12,3,1\n";
    let wave2 = "sampid,w02ecoact,w02student\n11,3,2\n";
    let wave3 = "sampid,w03ecoact,w03student\n99,1,2\n";
    let fixture = Fixture::new(wave1, wave2, wave3);

    let dataset = build_dataset(&fixture.config).expect("build dataset");

    assert_eq!(dataset.summary.wave1_subjects, 3);
    assert_eq!(dataset.summary.wave2_matched, 1);
    assert_eq!(dataset.summary.wave3_matched, 0);
    assert_eq!(dataset.records.len(), 2);
    assert!(dataset.records.iter().all(|record| !record.got_job()));
    assert_eq!(dataset.records[0].waves_observed(), 1);
    assert_eq!(dataset.records[1].waves_observed(), 2);
    assert_eq!(dataset.summary.success_rate(), 0.0);
}

#[test]
fn test_missing_wave_file_produces_no_output() {
    let fixture = Fixture::new(WAVE1_BASIC, WAVE2_BASIC, WAVE3_BASIC);
    fs::remove_file(&fixture.config.wave3_path).expect("remove wave 3");

    let err = run_pipeline(&fixture.config, &fixture.output()).unwrap_err();

    assert!(err.is_missing_input());
    assert!(!fixture.output().exists());
}

#[test]
fn test_missing_required_column_is_fatal() {
    let wave2 = "sampid,w02student\n1,2\n";
    let fixture = Fixture::new(WAVE1_BASIC, wave2, WAVE3_BASIC);

    let err = run_pipeline(&fixture.config, &fixture.output()).unwrap_err();

    assert!(matches!(err, PipelineError::MissingColumn { ref column, .. } if column == "w02ecoact"));
    assert!(err.to_string().contains("w02ecoact"));
    assert!(!fixture.output().exists());
}

#[test]
fn test_korean_locale_labels() {
    let mut fixture = Fixture::new(WAVE1_BASIC, WAVE2_BASIC, WAVE3_BASIC);
    fixture.config.locale = Locale::Ko;

    run_pipeline(&fixture.config, &fixture.output()).expect("pipeline run");

    let table = read_output(&fixture.output());
    assert_eq!(table.value(0, "outcome"), "취업 성공");
    assert_eq!(table.value(0, "gender_label"), "남성");
    assert_eq!(table.value(0, "edu_label"), "고졸");
    assert_eq!(table.value(0, "exp_type"), "경험 없음");
}

#[test]
fn test_basic_variant_column_set() {
    let mut fixture = Fixture::new(WAVE1_BASIC, WAVE2_BASIC, WAVE3_BASIC);
    fixture.config.variant = PipelineVariant::Basic;

    run_pipeline(&fixture.config, &fixture.output()).expect("pipeline run");

    let table = read_output(&fixture.output());
    assert_eq!(table.header.first().map(String::as_str), Some("sampid"));
    assert_eq!(table.header.last().map(String::as_str), Some("waves_observed"));
    assert!(!table.header.iter().any(|name| name == "financial_assets"));
    assert!(table.header.iter().any(|name| name == "career_plan_score"));
}

#[test]
fn test_rerun_overwrites_output() {
    let fixture = Fixture::new(WAVE1_BASIC, WAVE2_BASIC, WAVE3_BASIC);
    fs::write(fixture.output(), "previous contents\n").expect("seed output");

    run_pipeline(&fixture.config, &fixture.output()).expect("first run");
    let first = fs::read(fixture.output()).expect("read output");
    run_pipeline(&fixture.config, &fixture.output()).expect("second run");
    let second = fs::read(fixture.output()).expect("read output");

    assert_eq!(first, second);
    assert_eq!(read_output(&fixture.output()).rows.len(), 1);
}

#[test]
fn test_rows_without_subject_id_are_counted() {
    let wave1 = "sampid,w01ecoact,w01student\n1,3,2\n,3,2\n";
    let fixture = Fixture::new(wave1, WAVE2_BASIC, WAVE3_BASIC);

    let summary = run_pipeline(&fixture.config, &fixture.output()).expect("pipeline run");

    assert_eq!(summary.wave1_subjects, 1);
    assert_eq!(summary.wave1_unlinked_rows, 1);
    assert_eq!(summary.neet_subjects, 1);
    assert_eq!(read_output(&fixture.output()).rows.len(), 1);
}

#[test]
fn test_empty_cohort_writes_header_only() {
    let wave1 = "sampid,w01ecoact,w01student\n1,1,2\n2,3,1\n";
    let fixture = Fixture::new(wave1, WAVE2_BASIC, WAVE3_BASIC);

    let summary = run_pipeline(&fixture.config, &fixture.output()).expect("pipeline run");

    assert_eq!(summary.wave1_subjects, 2);
    assert_eq!(summary.neet_subjects, 0);
    assert_eq!(summary.success_rate(), 0.0);

    let table = read_output(&fixture.output());
    assert!(table.rows.is_empty());
    assert_eq!(table.header.len(), 41);
    assert_eq!(table.header.first().map(String::as_str), Some("sampid"));
    assert_eq!(table.header.last().map(String::as_str), Some("job_search_count"));
}
