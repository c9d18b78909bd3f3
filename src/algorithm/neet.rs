//! NEET classification
//!
//! A subject is NEET when, in wave 1, they are unemployed or economically
//! inactive and not a student. Later waves never change the classification.

use log::info;

use crate::models::codes::{EconActivity, Label, StudentStatus};
use crate::models::panel::PanelRecord;

/// Wave-1 NEET predicate
///
/// Missing or unknown codes make the predicate false.
#[must_use]
pub fn is_neet(record: &PanelRecord) -> bool {
    let status = record.wave1.status;
    let econ = status.econ_activity.and_then(EconActivity::from_code);
    let student = status.student_status.and_then(StudentStatus::from_code);

    matches!(econ, Some(EconActivity::Unemployed | EconActivity::Inactive))
        && student == Some(StudentStatus::NotStudent)
}

/// The panel records that were NEET in wave 1
///
/// Only [`NeetCohort::classify`] builds a cohort, so every member satisfies
/// [`is_neet`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeetCohort {
    members: Vec<PanelRecord>,
}

impl NeetCohort {
    /// Keep the NEET records of a merged panel
    #[must_use]
    pub fn classify(panel: Vec<PanelRecord>) -> Self {
        let total = panel.len();
        let members: Vec<PanelRecord> = panel.into_iter().filter(is_neet).collect();
        info!("Classified {} of {} wave-1 subjects as NEET", members.len(), total);
        Self { members }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelRecord> {
        self.members.iter()
    }

    /// Take the member records
    #[must_use]
    pub fn into_records(self) -> Vec<PanelRecord> {
        self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::wave::{StatusCodes, Wave1Record};

    fn record(econ: Option<i64>, student: Option<i64>) -> PanelRecord {
        let mut wave1 = Wave1Record::new(1, 0, 0);
        wave1.status = StatusCodes {
            econ_activity: econ,
            student_status: student,
        };
        PanelRecord::new(wave1)
    }

    #[test]
    fn test_unemployed_and_inactive_non_students_are_neet() {
        assert!(is_neet(&record(Some(2), Some(2))));
        assert!(is_neet(&record(Some(3), Some(2))));
    }

    #[test]
    fn test_employed_or_students_are_not_neet() {
        assert!(!is_neet(&record(Some(1), Some(2))));
        assert!(!is_neet(&record(Some(3), Some(1))));
        assert!(!is_neet(&record(Some(4), Some(2))));
    }

    #[test]
    fn test_null_inputs_are_not_neet() {
        assert!(!is_neet(&record(None, Some(2))));
        assert!(!is_neet(&record(Some(2), None)));
        assert!(!is_neet(&record(None, None)));
    }

    #[test]
    fn test_classify_filters_panel() {
        let panel = vec![
            record(Some(3), Some(2)),
            record(Some(1), Some(2)),
            record(Some(2), Some(2)),
        ];
        let cohort = NeetCohort::classify(panel);
        assert_eq!(cohort.len(), 2);
        assert!(cohort.iter().all(is_neet));
    }
}
