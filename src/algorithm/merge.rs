//! Panel merging
//!
//! Left-joins the follow-up waves onto wave 1 by subject ID. Every wave-1
//! record yields exactly one panel record, in wave-1 order.

use log::{info, warn};
use rustc_hash::FxHashMap;

use crate::models::panel::PanelRecord;
use crate::models::wave::{FollowUpRecord, SubjectId, Wave, Wave1Record};

/// Index follow-up records by subject ID
///
/// Subject IDs are expected to be unique within a wave. If one is repeated,
/// the first occurrence is kept and the rest are ignored.
#[must_use]
pub fn index_by_subject(wave: Wave, records: Vec<FollowUpRecord>) -> FxHashMap<SubjectId, FollowUpRecord> {
    let mut index = FxHashMap::default();
    index.reserve(records.len());

    let mut duplicates = 0usize;
    for record in records {
        if index.contains_key(&record.subject_id) {
            duplicates += 1;
            continue;
        }
        index.insert(record.subject_id.clone(), record);
    }

    if duplicates > 0 {
        warn!("{wave} contains {duplicates} duplicate subject IDs; kept the first occurrence of each");
    }
    index
}

/// Left-join wave 2 and wave 3 onto wave 1
///
/// # Arguments
///
/// * `wave1` - Wave-1 records, one per subject
/// * `wave2` - Wave-2 records
/// * `wave3` - Wave-3 records
///
/// # Returns
///
/// One panel record per wave-1 record. Subjects missing from a follow-up
/// wave get `None` for that wave.
#[must_use]
pub fn merge_waves(
    wave1: Vec<Wave1Record>,
    wave2: Vec<FollowUpRecord>,
    wave3: Vec<FollowUpRecord>,
) -> Vec<PanelRecord> {
    let wave2 = index_by_subject(Wave::Second, wave2);
    let wave3 = index_by_subject(Wave::Third, wave3);

    let panel: Vec<PanelRecord> = wave1
        .into_iter()
        .map(|record| {
            let id = &record.subject_id;
            let second = wave2.get(id).cloned();
            let third = wave3.get(id).cloned();
            PanelRecord {
                wave1: record,
                wave2: second,
                wave3: third,
            }
        })
        .collect();

    let matched2 = panel.iter().filter(|record| record.wave2.is_some()).count();
    let matched3 = panel.iter().filter(|record| record.wave3.is_some()).count();
    info!(
        "Merged panel: {} subjects, {} matched in wave 2, {} matched in wave 3",
        panel.len(),
        matched2,
        matched3
    );

    panel
}
