//! Merged panel records
//!
//! One record per wave-1 subject with the matched follow-up records, if any.

use crate::models::wave::{CareerItem, FollowUpRecord, StatusCodes, SubjectId, Wave, Wave1Record};

/// A wave-1 subject with its wave-2 and wave-3 observations
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRecord {
    /// Wave-1 record, always present
    pub wave1: Wave1Record,
    /// Wave-2 record, absent on attrition
    pub wave2: Option<FollowUpRecord>,
    /// Wave-3 record, absent on attrition
    pub wave3: Option<FollowUpRecord>,
}

impl PanelRecord {
    /// Panel record with no follow-up observations
    #[must_use]
    pub fn new(wave1: Wave1Record) -> Self {
        Self {
            wave1,
            wave2: None,
            wave3: None,
        }
    }

    /// Attach a wave-2 record
    #[must_use]
    pub fn with_wave2(mut self, record: FollowUpRecord) -> Self {
        self.wave2 = Some(record);
        self
    }

    /// Attach a wave-3 record
    #[must_use]
    pub fn with_wave3(mut self, record: FollowUpRecord) -> Self {
        self.wave3 = Some(record);
        self
    }

    #[must_use]
    pub fn subject_id(&self) -> &SubjectId {
        &self.wave1.subject_id
    }

    /// Follow-up record of a wave; `None` for wave 1
    #[must_use]
    pub fn follow_up(&self, wave: Wave) -> Option<&FollowUpRecord> {
        match wave {
            Wave::First => None,
            Wave::Second => self.wave2.as_ref(),
            Wave::Third => self.wave3.as_ref(),
        }
    }

    /// Status codes of a wave; `None` when the subject was not observed
    #[must_use]
    pub fn status(&self, wave: Wave) -> Option<StatusCodes> {
        match wave {
            Wave::First => Some(self.wave1.status),
            Wave::Second | Wave::Third => self.follow_up(wave).map(|record| record.status),
        }
    }

    /// Economic-activity code of a wave, null on attrition
    #[must_use]
    pub fn econ_activity(&self, wave: Wave) -> Option<i64> {
        self.status(wave).and_then(|status| status.econ_activity)
    }

    /// Student-status code of a wave, null on attrition
    #[must_use]
    pub fn student_status(&self, wave: Wave) -> Option<i64> {
        self.status(wave).and_then(|status| status.student_status)
    }

    /// A career-planning item in a wave
    #[must_use]
    pub fn career_score(&self, wave: Wave, item: CareerItem) -> Option<f64> {
        match wave {
            Wave::First => self.wave1.career.get(item),
            Wave::Second | Wave::Third => {
                self.follow_up(wave).and_then(|record| record.career.get(item))
            }
        }
    }

    /// Number of waves in which the subject appears (1 to 3)
    #[must_use]
    pub fn waves_observed(&self) -> u8 {
        1 + u8::from(self.wave2.is_some()) + u8::from(self.wave3.is_some())
    }
}
