//! Cohort summary statistics

use std::fmt;

use crate::models::enriched::EnrichedRecord;
use crate::models::panel::PanelRecord;

/// Counts describing one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CohortSummary {
    /// Linkable subjects in the wave-1 file
    pub wave1_subjects: usize,
    /// Wave-1 rows dropped because they carry no subject ID
    pub wave1_unlinked_rows: usize,
    /// Wave-1 subjects found in wave 2
    pub wave2_matched: usize,
    /// Wave-1 subjects found in wave 3
    pub wave3_matched: usize,
    /// Subjects classified as NEET in wave 1
    pub neet_subjects: usize,
    /// NEET subjects employed in a follow-up wave
    pub employed_subjects: usize,
}

impl CohortSummary {
    /// Record the merge counts of a panel
    #[must_use]
    pub fn from_panel(panel: &[PanelRecord]) -> Self {
        Self {
            wave1_subjects: panel.len(),
            wave2_matched: panel.iter().filter(|record| record.wave2.is_some()).count(),
            wave3_matched: panel.iter().filter(|record| record.wave3.is_some()).count(),
            ..Self::default()
        }
    }

    /// Record wave-1 rows that could not be linked
    #[must_use]
    pub fn with_unlinked_rows(mut self, rows: usize) -> Self {
        self.wave1_unlinked_rows = rows;
        self
    }

    /// Add the cohort counts of the enriched records
    #[must_use]
    pub fn with_cohort(mut self, records: &[EnrichedRecord]) -> Self {
        self.neet_subjects = records.len();
        self.employed_subjects = records.iter().filter(|record| record.got_job()).count();
        self
    }

    /// Share of the cohort that found employment, in percent; 0 for an empty cohort
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.neet_subjects == 0 {
            return 0.0;
        }
        self.employed_subjects as f64 / self.neet_subjects as f64 * 100.0
    }
}

impl fmt::Display for CohortSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cohort Summary:")?;
        writeln!(f, "  Wave-1 Subjects: {}", self.wave1_subjects)?;
        writeln!(f, "  Wave-1 Rows Without ID: {}", self.wave1_unlinked_rows)?;
        writeln!(f, "  Matched in Wave 2: {}", self.wave2_matched)?;
        writeln!(f, "  Matched in Wave 3: {}", self.wave3_matched)?;
        writeln!(f, "  NEET Subjects: {}", self.neet_subjects)?;
        writeln!(f, "  Employed After Wave 1: {}", self.employed_subjects)?;
        write!(f, "  Success Rate: {:.1}%", self.success_rate())
    }
}
