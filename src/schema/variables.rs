//! Survey variable catalog
//!
//! Column names of every survey item the pipeline reads. The defaults follow
//! the YP2021 youth panel codebook (`w01ecoact`, `y01e606`, ...); any of them
//! can be overridden from the configuration file when a survey round renames
//! an item.

use serde::Deserialize;

use crate::models::wave::{CareerItem, Wave};

/// Column names of the four repeated career-planning items in one wave
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CareerItemColumns {
    pub plan_clarity: String,
    pub decision_difficulty: String,
    pub indecision: String,
    pub unknown_aptitude: String,
}

impl CareerItemColumns {
    /// Default column names for a wave (`y01e501` ... `y03e504`)
    #[must_use]
    pub fn for_wave(wave: Wave) -> Self {
        let prefix = format!("y{:02}e50", wave.number());
        Self {
            plan_clarity: format!("{prefix}1"),
            decision_difficulty: format!("{prefix}2"),
            indecision: format!("{prefix}3"),
            unknown_aptitude: format!("{prefix}4"),
        }
    }

    /// Column name of one item
    #[must_use]
    pub fn column(&self, item: CareerItem) -> &str {
        match item {
            CareerItem::PlanClarity => &self.plan_clarity,
            CareerItem::DecisionDifficulty => &self.decision_difficulty,
            CareerItem::Indecision => &self.indecision,
            CareerItem::UnknownAptitude => &self.unknown_aptitude,
        }
    }
}

/// Column names of the wave-1 file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Wave1Columns {
    pub econ_activity: String,
    pub student_status: String,
    pub gender: String,
    pub birth_year: String,
    pub education: String,
    pub region: String,
    pub health: String,
    pub had_experience: String,
    pub experience_type: String,
    pub career_guidance: String,
    pub career: CareerItemColumns,
    pub self_efficacy: [String; 3],
    pub father_education: String,
    pub mother_education: String,
    pub no_assets: String,
    pub asset_amount: String,
    pub search_method: String,
    pub search_difficulty: String,
    pub search_duration: String,
    pub search_count: String,
}

impl Default for Wave1Columns {
    fn default() -> Self {
        Self {
            econ_activity: "w01ecoact".to_string(),
            student_status: "w01student".to_string(),
            gender: "gender".to_string(),
            birth_year: "birthy".to_string(),
            education: "w01edu".to_string(),
            region: "w01region".to_string(),
            health: "y01e606".to_string(),
            had_experience: "y01a601".to_string(),
            experience_type: "y01a616_1".to_string(),
            career_guidance: "y01e401".to_string(),
            career: CareerItemColumns::for_wave(Wave::First),
            self_efficacy: [
                "y01e701".to_string(),
                "y01e702".to_string(),
                "y01e703".to_string(),
            ],
            father_education: "y01f101".to_string(),
            mother_education: "y01f102".to_string(),
            no_assets: "y01g301".to_string(),
            asset_amount: "y01g302".to_string(),
            search_method: "y01c101".to_string(),
            search_difficulty: "y01c201".to_string(),
            search_duration: "y01c301".to_string(),
            search_count: "y01c302".to_string(),
        }
    }
}

/// Column names of a follow-up wave file
///
/// When overridden from configuration, every name must be given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FollowUpColumns {
    pub econ_activity: String,
    pub student_status: String,
    pub career: CareerItemColumns,
}

impl FollowUpColumns {
    /// Default column names for a follow-up wave (`w02ecoact`, `y02e501`, ...)
    #[must_use]
    pub fn for_wave(wave: Wave) -> Self {
        Self {
            econ_activity: format!("w{:02}ecoact", wave.number()),
            student_status: format!("w{:02}student", wave.number()),
            career: CareerItemColumns::for_wave(wave),
        }
    }
}

/// Column names of every survey item, across all three waves
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VariableCatalog {
    /// Subject ID column, shared by all waves
    pub subject_id: String,
    pub wave1: Wave1Columns,
    pub wave2: FollowUpColumns,
    pub wave3: FollowUpColumns,
}

impl Default for VariableCatalog {
    fn default() -> Self {
        Self {
            subject_id: "sampid".to_string(),
            wave1: Wave1Columns::default(),
            wave2: FollowUpColumns::for_wave(Wave::Second),
            wave3: FollowUpColumns::for_wave(Wave::Third),
        }
    }
}

impl VariableCatalog {
    /// Follow-up columns of a wave; wave 1 has no follow-up columns
    #[must_use]
    pub fn follow_up(&self, wave: Wave) -> Option<&FollowUpColumns> {
        match wave {
            Wave::First => None,
            Wave::Second => Some(&self.wave2),
            Wave::Third => Some(&self.wave3),
        }
    }

    /// Career-planning item columns of any wave
    #[must_use]
    pub fn career(&self, wave: Wave) -> &CareerItemColumns {
        match wave {
            Wave::First => &self.wave1.career,
            Wave::Second => &self.wave2.career,
            Wave::Third => &self.wave3.career,
        }
    }
}
