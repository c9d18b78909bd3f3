//! Score aggregation over optional survey items
//!
//! Both the self-efficacy score and the multi-wave career averages are
//! means over the items that were actually answered.

use smallvec::SmallVec;

use crate::models::panel::PanelRecord;
use crate::models::wave::{CareerItem, CareerScores, Wave};

/// One item's value in each wave, inline for the three survey waves
pub type WaveScores = SmallVec<[(Wave, Option<f64>); 3]>;

/// Mean of the present values; `None` if no value is present
#[must_use]
pub fn mean_present<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .filter(|value| value.is_finite())
        .fold((0.0, 0u32), |(sum, count), value| (sum + value, count + 1));

    (count > 0).then(|| sum / f64::from(count))
}

/// Values of a career-planning item in every wave
#[must_use]
pub fn career_item_scores(record: &PanelRecord, item: CareerItem) -> WaveScores {
    Wave::ALL
        .iter()
        .map(|&wave| (wave, record.career_score(wave, item)))
        .collect()
}

/// Per-item means of the career-planning items across all waves
#[must_use]
pub fn career_averages(record: &PanelRecord) -> CareerScores {
    let mut averages = CareerScores::default();
    for item in CareerItem::ALL {
        let scores = career_item_scores(record, item);
        averages.set(item, mean_present(scores.iter().map(|(_, value)| *value)));
    }
    averages
}

/// Mean of the self-efficacy items
#[must_use]
pub fn self_efficacy(record: &PanelRecord) -> Option<f64> {
    mean_present(record.wave1.self_efficacy)
}
