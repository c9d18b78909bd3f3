//! Panel algorithms
//!
//! The stages between loading and writing: merging the waves, classifying
//! the NEET cohort, deriving the outcome and enriching each record.

pub mod enrich;
pub mod merge;
pub mod neet;
pub mod outcome;
pub mod scores;
pub mod statistics;

pub use enrich::{EnrichContext, enrich_cohort};
pub use merge::merge_waves;
pub use neet::{NeetCohort, is_neet};
pub use outcome::derive_outcome;
pub use statistics::CohortSummary;
