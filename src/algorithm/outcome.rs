//! Outcome derivation
//!
//! A NEET subject counts as employed if either follow-up wave records
//! economic activity code 1. A subject missing from a follow-up wave is
//! treated the same as one observed without employment.

use crate::models::codes::{EconActivity, Label};
use crate::models::enriched::Outcome;
use crate::models::panel::PanelRecord;
use crate::models::wave::Wave;

/// Whether a subject was employed in a given wave
#[must_use]
pub fn employed_in(record: &PanelRecord, wave: Wave) -> bool {
    record
        .econ_activity(wave)
        .and_then(EconActivity::from_code)
        == Some(EconActivity::Employed)
}

/// Derive the post-wave-1 labor-market outcome
#[must_use]
pub fn derive_outcome(record: &PanelRecord) -> Outcome {
    if Wave::FOLLOW_UPS.iter().any(|&wave| employed_in(record, wave)) {
        Outcome::Employed
    } else {
        Outcome::NotEmployed
    }
}
