//! Feature enrichment
//!
//! Turns each NEET cohort member into an [`EnrichedRecord`]. Every derivation
//! is total: missing or malformed inputs produce a null or a sentinel, never
//! an error.

use std::time::Instant;

use log::{debug, info};

use crate::algorithm::neet::NeetCohort;
use crate::algorithm::outcome::derive_outcome;
use crate::algorithm::scores::{career_averages, self_efficacy};
use crate::config::PipelineConfig;
use crate::models::codes::{Coded, ExperienceType, ParentEducation};
use crate::models::enriched::EnrichedRecord;
use crate::models::panel::PanelRecord;
use crate::models::wave::{CareerItem, Wave1Record};
use crate::schema::fields::{FieldPresence, Wave1Field};

/// Inputs shared by every derivation of a run
#[derive(Debug, Clone, Copy)]
pub struct EnrichContext<'a> {
    /// Year ages are computed against
    pub reference_year: i64,
    /// Asset amounts that encode non-response
    pub asset_sentinels: &'a [f64],
    /// Optional wave-1 columns found in the input
    pub presence: &'a FieldPresence<Wave1Field>,
}

impl<'a> EnrichContext<'a> {
    /// Context from a run configuration and the wave-1 presence set
    #[must_use]
    pub fn new(config: &'a PipelineConfig, presence: &'a FieldPresence<Wave1Field>) -> Self {
        Self {
            reference_year: config.reference_year,
            asset_sentinels: &config.asset_sentinels,
            presence,
        }
    }
}

/// Age at the reference year
#[must_use]
pub fn age(reference_year: i64, birth_year: Option<i64>) -> Option<i64> {
    birth_year.map(|year| reference_year - year)
}

/// Work-experience category
///
/// Anything other than an affirmative answer to the experience question
/// means no experience; the type item is only read for those who answered
/// yes.
#[must_use]
pub fn experience_type(had_experience: Option<i64>, kind: Option<i64>) -> ExperienceType {
    if had_experience != Some(1) {
        return ExperienceType::NoExperience;
    }
    match kind {
        Some(1 | 2) => ExperienceType::InternshipFieldwork,
        Some(3) => ExperienceType::PartTime,
        Some(4) => ExperienceType::Startup,
        _ => ExperienceType::Other,
    }
}

/// Financial asset amount
///
/// A "has no financial assets" answer forces exactly zero regardless of the
/// amount item. Otherwise sentinel amounts and unparsable values are null.
#[must_use]
pub fn financial_assets(no_assets: Option<i64>, amount: Option<f64>, sentinels: &[f64]) -> Option<f64> {
    if no_assets == Some(1) {
        return Some(0.0);
    }
    amount.filter(|value| value.is_finite() && !sentinels.contains(value))
}

/// Job-search duration or count
///
/// Blank and unparsable answers count as zero. When the column is absent
/// from the file the value is null.
#[must_use]
pub fn search_numeric(column_present: bool, value: Option<f64>) -> Option<f64> {
    column_present.then(|| value.unwrap_or(0.0))
}

/// Higher of the two parents' education levels
#[must_use]
pub fn parent_education(
    father: Coded<ParentEducation>,
    mother: Coded<ParentEducation>,
) -> Option<ParentEducation> {
    father.mapped().max(mother.mapped())
}

/// Enrich one NEET panel record
#[must_use]
pub fn enrich_record(record: PanelRecord, context: &EnrichContext<'_>) -> EnrichedRecord {
    let outcome = derive_outcome(&record);
    let wave1: &Wave1Record = &record.wave1;

    let father_education = Coded::lookup(wave1.father_education);
    let mother_education = Coded::lookup(wave1.mother_education);

    EnrichedRecord {
        neet_w1: true,
        outcome,
        got_job_flag: outcome.flag(),
        age: age(context.reference_year, wave1.birth_year),
        gender: Coded::lookup(wave1.gender),
        education: Coded::lookup(wave1.education),
        region: Coded::lookup(wave1.region),
        health: Coded::lookup(wave1.health),
        experience: experience_type(wave1.had_experience, wave1.experience_type),
        career_guidance: Coded::lookup(wave1.career_guidance),
        career_plan_score: wave1.career.get(CareerItem::PlanClarity),
        self_efficacy: self_efficacy(&record),
        career_averages: career_averages(&record),
        father_education,
        mother_education,
        parent_education: parent_education(father_education, mother_education),
        financial_assets: financial_assets(wave1.no_assets, wave1.asset_amount, context.asset_sentinels),
        search_method: Coded::lookup(wave1.search_method),
        search_difficulty: Coded::lookup(wave1.search_difficulty),
        search_duration: search_numeric(
            context.presence.contains(Wave1Field::SearchDuration),
            wave1.search_duration,
        ),
        search_count: search_numeric(
            context.presence.contains(Wave1Field::SearchCount),
            wave1.search_count,
        ),
        panel: record,
    }
}

/// Enrich every member of a NEET cohort, preserving order
#[must_use]
pub fn enrich_cohort(cohort: NeetCohort, context: &EnrichContext<'_>) -> Vec<EnrichedRecord> {
    let start = Instant::now();
    debug!(
        "Enriching with reference year {} and {} asset sentinels",
        context.reference_year,
        context.asset_sentinels.len()
    );

    let records: Vec<EnrichedRecord> = cohort
        .into_records()
        .into_iter()
        .map(|record| enrich_record(record, context))
        .collect();

    info!("Enriched {} cohort records in {:?}", records.len(), start.elapsed());
    records
}
