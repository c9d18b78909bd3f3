//! Enriched cohort records
//!
//! The final per-subject record: the panel observations of a NEET subject
//! plus every derived outcome, label and score.

use crate::models::codes::{
    CareerGuidance, Coded, Education, ExperienceType, Gender, Health, JobSearchMethod, Locale,
    ParentEducation, Region, SearchDifficulty,
};
use crate::models::panel::PanelRecord;
use crate::models::wave::CareerScores;

/// Labor-market outcome after wave 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Employed in wave 2 or wave 3
    Employed,
    /// No employment observed in either follow-up
    NotEmployed,
}

impl Outcome {
    /// Numeric mirror of the outcome (1 employed, 0 otherwise)
    #[must_use]
    pub const fn flag(self) -> u8 {
        match self {
            Self::Employed => 1,
            Self::NotEmployed => 0,
        }
    }

    /// Label in the given locale
    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Employed, Locale::En) => "EMPLOYED",
            (Self::NotEmployed, Locale::En) => "NOT_EMPLOYED",
            (Self::Employed, Locale::Ko) => "취업 성공",
            (Self::NotEmployed, Locale::Ko) => "미취업",
        }
    }
}

/// A NEET subject with all derived fields
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    /// Source observations
    pub panel: PanelRecord,
    /// Wave-1 NEET status (always true for cohort members)
    pub neet_w1: bool,
    pub outcome: Outcome,
    /// 1 if `outcome` is employed, 0 otherwise
    pub got_job_flag: u8,
    /// Age at the reference year
    pub age: Option<i64>,
    pub gender: Coded<Gender>,
    pub education: Coded<Education>,
    pub region: Coded<Region>,
    pub health: Coded<Health>,
    pub experience: ExperienceType,
    pub career_guidance: Coded<CareerGuidance>,
    /// Raw wave-1 career-plan clarity item
    pub career_plan_score: Option<f64>,
    /// Mean of the self-efficacy items
    pub self_efficacy: Option<f64>,
    /// Per-item means of the career-planning items across all waves
    pub career_averages: CareerScores,
    pub father_education: Coded<ParentEducation>,
    pub mother_education: Coded<ParentEducation>,
    /// Higher of the two parents' education levels
    pub parent_education: Option<ParentEducation>,
    /// Financial asset amount after sentinel handling
    pub financial_assets: Option<f64>,
    pub search_method: Coded<JobSearchMethod>,
    pub search_difficulty: Coded<SearchDifficulty>,
    /// Job-search duration; 0 for blank answers, null if the item was not asked
    pub search_duration: Option<f64>,
    /// Job-search count; 0 for blank answers, null if the item was not asked
    pub search_count: Option<f64>,
}

impl EnrichedRecord {
    /// Whether the subject entered the labor market
    #[must_use]
    pub fn got_job(&self) -> bool {
        self.outcome == Outcome::Employed
    }

    /// Number of waves in which the subject appears
    #[must_use]
    pub fn waves_observed(&self) -> u8 {
        self.panel.waves_observed()
    }
}
