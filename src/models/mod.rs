//! Domain models for the NEET panel
//!
//! Survey code tables, per-wave records, the merged panel record and the
//! enriched cohort record written to the output table.

pub mod codes;
pub mod enriched;
pub mod panel;
pub mod wave;

// Re-export commonly used types
pub use codes::{Coded, ExperienceType, Label, Locale, Sentinel};
pub use enriched::{EnrichedRecord, Outcome};
pub use panel::PanelRecord;
pub use wave::{CareerItem, CareerScores, FollowUpRecord, StatusCodes, SubjectId, Wave, Wave1Record};
