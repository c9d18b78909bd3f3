use neet_panel::run_pipeline;

use crate::utils::{Fixture, read_output};

const WAVE1_EXTENDED: &str = "\
sampid,w01ecoact,w01student,birthy,gender,y01a601,y01a616_1,y01e401,y01e501,y01e701,y01e702,y01e703,y01f101,y01f102,y01g301,y01g302,y01c101,y01c201,y01c301
1,2,2,2000,2,1,3,1,,,3,5,4,6,2,999999,5,,
2,3,2,1999,1,2,,2,2,4,4,4,,3,1,9090909,,3,6
3,2,2,1997,1,1,2,9,5,,,,,,2,1500,8,7,2
";

const WAVE2_EXTENDED: &str = "\
sampid,w02ecoact,w02student,y02e501
1,3,2,3
2,1,2,
";

const WAVE3_EXTENDED: &str = "\
sampid,w03ecoact,w03student,y03e501
1,2,2,5
3,3,2,1
";

fn number(text: &str) -> Option<f64> {
    if text.is_empty() {
        None
    } else {
        Some(text.parse().expect("numeric output"))
    }
}

fn run() -> crate::utils::OutputTable {
    let fixture = Fixture::new(WAVE1_EXTENDED, WAVE2_EXTENDED, WAVE3_EXTENDED);
    run_pipeline(&fixture.config, &fixture.output()).expect("pipeline run");
    read_output(&fixture.output())
}

#[test]
fn test_multi_wave_career_average_skips_missing_waves() {
    let table = run();

    // Subject 1: wave 1 blank, wave 2 = 3, wave 3 = 5
    assert_eq!(number(table.value(0, "career_plan_clarity_avg")), Some(4.0));
    assert_eq!(number(table.value(0, "career_plan_score")), None);
    // Subject 2: wave 1 only
    assert_eq!(number(table.value(1, "career_plan_clarity_avg")), Some(2.0));
    // Items with no column in any wave are null
    assert_eq!(number(table.value(0, "indecision_avg")), None);
}

#[test]
fn test_self_efficacy_mean() {
    let table = run();

    assert_eq!(number(table.value(0, "self_efficacy")), Some(4.0));
    assert_eq!(number(table.value(1, "self_efficacy")), Some(4.0));
    assert_eq!(number(table.value(2, "self_efficacy")), None);
}

#[test]
fn test_financial_asset_sentinels() {
    let table = run();

    // Sentinel amount without the no-assets flag
    assert_eq!(number(table.value(0, "financial_assets")), None);
    // No-assets flag wins over a sentinel amount
    assert_eq!(number(table.value(1, "financial_assets")), Some(0.0));
    assert_eq!(number(table.value(2, "financial_assets")), Some(1500.0));
}

#[test]
fn test_job_search_fields() {
    let table = run();

    assert_eq!(table.value(0, "job_search_method"), "direct application");
    assert_eq!(table.value(0, "job_search_difficulty"), "not applicable");
    assert_eq!(table.value(1, "job_search_method"), "no response");
    assert_eq!(table.value(1, "job_search_difficulty"), "lack of experience or skills");
    assert_eq!(table.value(2, "job_search_method"), "no response");
    assert_eq!(table.value(2, "job_search_difficulty"), "not applicable");

    // Duration column present: blanks are zero
    assert_eq!(number(table.value(0, "job_search_months")), Some(0.0));
    assert_eq!(number(table.value(1, "job_search_months")), Some(6.0));
    // Count column absent from the file: null
    assert_eq!(number(table.value(0, "job_search_count")), None);
}

#[test]
fn test_experience_guidance_and_parents() {
    let table = run();

    assert_eq!(table.value(0, "exp_type"), "part-time");
    assert_eq!(table.value(1, "exp_type"), "no experience");
    assert_eq!(table.value(2, "exp_type"), "internship/fieldwork");

    assert_eq!(table.value(0, "career_guidance"), "has guidance");
    assert_eq!(table.value(1, "career_guidance"), "no guidance");
    assert_eq!(table.value(2, "career_guidance"), "");

    assert_eq!(table.value(0, "father_edu_label"), "high school");
    assert_eq!(table.value(0, "parent_edu_label"), "university");
    assert_eq!(table.value(1, "parent_edu_label"), "middle school");
    assert_eq!(table.value(2, "parent_edu_label"), "");
}

#[test]
fn test_outcomes_and_ages() {
    let table = run();

    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.value(0, "outcome"), "NOT_EMPLOYED");
    assert_eq!(table.value(1, "outcome"), "EMPLOYED");
    assert_eq!(table.value(2, "outcome"), "NOT_EMPLOYED");
    assert_eq!(table.value(0, "age"), "21");
    assert_eq!(table.value(2, "waves_observed"), "2");
}
