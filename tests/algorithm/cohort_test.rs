use neet_panel::models::{FollowUpRecord, Wave1Record};
use neet_panel::{NeetCohort, Outcome, Wave, derive_outcome, is_neet, merge_waves};

fn wave1(records: &[(i64, Option<i64>, Option<i64>)]) -> Vec<Wave1Record> {
    records
        .iter()
        .map(|&(id, econ, student)| {
            let mut record = Wave1Record::new(id, 0, 0);
            record.status.econ_activity = econ;
            record.status.student_status = student;
            record
        })
        .collect()
}

#[test]
fn test_merge_preserves_wave1_rows() {
    let panel = merge_waves(
        wave1(&[(1, Some(3), Some(2)), (2, None, None), (3, Some(1), Some(1))]),
        vec![FollowUpRecord::new(3_i64, 1), FollowUpRecord::new(4_i64, 1)],
        vec![FollowUpRecord::new(1_i64, 1)],
    );

    assert_eq!(panel.len(), 3);
    assert_eq!(panel[0].econ_activity(Wave::Third), Some(1));
    assert_eq!(panel[1].econ_activity(Wave::Second), None);
    assert_eq!(panel[2].econ_activity(Wave::Second), Some(1));
}

#[test]
fn test_cohort_members_satisfy_predicate() {
    let panel = merge_waves(
        wave1(&[
            (1, Some(2), Some(2)),
            (2, Some(3), Some(2)),
            (3, Some(1), Some(2)),
            (4, Some(3), Some(1)),
            (5, None, Some(2)),
            (6, Some(7), Some(2)),
        ]),
        Vec::new(),
        Vec::new(),
    );

    let cohort = NeetCohort::classify(panel);

    assert_eq!(cohort.len(), 2);
    for record in cohort.iter() {
        assert!(is_neet(record));
        assert_eq!(record.student_status(Wave::First), Some(2));
    }
}

#[test]
fn test_follow_up_status_never_changes_neet_status() {
    let mut follow_up = FollowUpRecord::new(1_i64, 1);
    follow_up.status.student_status = Some(1);
    let panel = merge_waves(wave1(&[(1, Some(3), Some(2))]), vec![follow_up], Vec::new());

    assert!(is_neet(&panel[0]));
    assert_eq!(derive_outcome(&panel[0]), Outcome::Employed);
}
