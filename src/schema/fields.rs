//! Field definitions for each wave
//!
//! Every column the pipeline can read is an enumerated field. The loader
//! resolves the fields of a variant's whitelist against the file header and
//! records which optional ones were found in a [`FieldPresence`] set, so
//! derivations branch on presence instead of probing the table again.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::config::PipelineVariant;
use crate::models::wave::{CareerItem, Wave};
use crate::schema::variables::VariableCatalog;

/// A column the loader may select from a wave file
pub trait SurveyField: Copy + Eq + Hash + std::fmt::Debug {
    /// Column name of this field in the given wave
    fn column_in<'a>(self, catalog: &'a VariableCatalog, wave: Wave) -> &'a str;

    /// Whether a missing column is fatal
    fn is_required(self) -> bool;

    /// Short description for diagnostics
    fn description(self) -> &'static str;
}

/// Fields of the wave-1 file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wave1Field {
    SubjectId,
    EconActivity,
    StudentStatus,
    Gender,
    BirthYear,
    Education,
    Region,
    Health,
    HadExperience,
    ExperienceType,
    CareerGuidance,
    Career(CareerItem),
    /// One of the three self-efficacy items (index 0..3)
    SelfEfficacy(usize),
    FatherEducation,
    MotherEducation,
    NoAssets,
    AssetAmount,
    SearchMethod,
    SearchDifficulty,
    SearchDuration,
    SearchCount,
}

impl Wave1Field {
    /// Columns selected from wave 1 for a pipeline variant
    #[must_use]
    pub fn whitelist(variant: PipelineVariant) -> Vec<Self> {
        let mut fields = vec![
            Self::SubjectId,
            Self::Gender,
            Self::BirthYear,
            Self::EconActivity,
            Self::StudentStatus,
            Self::Education,
            Self::Region,
            Self::Health,
            Self::HadExperience,
            Self::ExperienceType,
            Self::CareerGuidance,
            Self::Career(CareerItem::PlanClarity),
        ];

        if variant == PipelineVariant::Extended {
            fields.extend([
                Self::Career(CareerItem::DecisionDifficulty),
                Self::Career(CareerItem::Indecision),
                Self::Career(CareerItem::UnknownAptitude),
                Self::SelfEfficacy(0),
                Self::SelfEfficacy(1),
                Self::SelfEfficacy(2),
                Self::FatherEducation,
                Self::MotherEducation,
                Self::NoAssets,
                Self::AssetAmount,
                Self::SearchMethod,
                Self::SearchDifficulty,
                Self::SearchDuration,
                Self::SearchCount,
            ]);
        }

        fields
    }

    /// Column name of this field
    #[must_use]
    pub fn column(self, catalog: &VariableCatalog) -> &str {
        let columns = &catalog.wave1;
        match self {
            Self::SubjectId => &catalog.subject_id,
            Self::EconActivity => &columns.econ_activity,
            Self::StudentStatus => &columns.student_status,
            Self::Gender => &columns.gender,
            Self::BirthYear => &columns.birth_year,
            Self::Education => &columns.education,
            Self::Region => &columns.region,
            Self::Health => &columns.health,
            Self::HadExperience => &columns.had_experience,
            Self::ExperienceType => &columns.experience_type,
            Self::CareerGuidance => &columns.career_guidance,
            Self::Career(item) => columns.career.column(item),
            Self::SelfEfficacy(index) => &columns.self_efficacy[index.min(2)],
            Self::FatherEducation => &columns.father_education,
            Self::MotherEducation => &columns.mother_education,
            Self::NoAssets => &columns.no_assets,
            Self::AssetAmount => &columns.asset_amount,
            Self::SearchMethod => &columns.search_method,
            Self::SearchDifficulty => &columns.search_difficulty,
            Self::SearchDuration => &columns.search_duration,
            Self::SearchCount => &columns.search_count,
        }
    }
}

impl SurveyField for Wave1Field {
    fn column_in<'a>(self, catalog: &'a VariableCatalog, _wave: Wave) -> &'a str {
        self.column(catalog)
    }

    fn is_required(self) -> bool {
        matches!(self, Self::SubjectId | Self::EconActivity | Self::StudentStatus)
    }

    fn description(self) -> &'static str {
        match self {
            Self::SubjectId => "subject ID",
            Self::EconActivity => "economic activity",
            Self::StudentStatus => "student status",
            Self::Gender => "gender",
            Self::BirthYear => "birth year",
            Self::Education => "education",
            Self::Region => "region",
            Self::Health => "self-rated health",
            Self::HadExperience => "work experience flag",
            Self::ExperienceType => "work experience type",
            Self::CareerGuidance => "career guidance",
            Self::Career(_) => "career-planning item",
            Self::SelfEfficacy(_) => "self-efficacy item",
            Self::FatherEducation => "father's education",
            Self::MotherEducation => "mother's education",
            Self::NoAssets => "no-assets flag",
            Self::AssetAmount => "financial asset amount",
            Self::SearchMethod => "job-search method",
            Self::SearchDifficulty => "job-search difficulty",
            Self::SearchDuration => "job-search duration",
            Self::SearchCount => "job-search count",
        }
    }
}

/// Fields of a follow-up wave file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FollowUpField {
    SubjectId,
    EconActivity,
    StudentStatus,
    Career(CareerItem),
}

impl FollowUpField {
    /// Columns selected from a follow-up wave for a pipeline variant
    #[must_use]
    pub fn whitelist(variant: PipelineVariant) -> Vec<Self> {
        let mut fields = vec![Self::SubjectId, Self::EconActivity, Self::StudentStatus];
        if variant == PipelineVariant::Extended {
            fields.extend(CareerItem::ALL.into_iter().map(Self::Career));
        }
        fields
    }

    /// Column name of this field in a follow-up wave
    ///
    /// Asking for a follow-up field of wave 1 resolves against the wave-1
    /// columns.
    #[must_use]
    pub fn column(self, catalog: &VariableCatalog, wave: Wave) -> &str {
        let Some(columns) = catalog.follow_up(wave) else {
            return match self {
                Self::SubjectId => &catalog.subject_id,
                Self::EconActivity => &catalog.wave1.econ_activity,
                Self::StudentStatus => &catalog.wave1.student_status,
                Self::Career(item) => catalog.wave1.career.column(item),
            };
        };
        match self {
            Self::SubjectId => &catalog.subject_id,
            Self::EconActivity => &columns.econ_activity,
            Self::StudentStatus => &columns.student_status,
            Self::Career(item) => columns.career.column(item),
        }
    }
}

impl SurveyField for FollowUpField {
    fn column_in<'a>(self, catalog: &'a VariableCatalog, wave: Wave) -> &'a str {
        self.column(catalog, wave)
    }

    fn is_required(self) -> bool {
        !matches!(self, Self::Career(_))
    }

    fn description(self) -> &'static str {
        match self {
            Self::SubjectId => "subject ID",
            Self::EconActivity => "economic activity",
            Self::StudentStatus => "student status",
            Self::Career(_) => "career-planning item",
        }
    }
}

/// The set of whitelisted fields actually present in a wave's input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPresence<F: SurveyField> {
    present: FxHashSet<F>,
}

impl<F: SurveyField> FieldPresence<F> {
    /// Presence set from the fields found in the input
    pub fn new(fields: impl IntoIterator<Item = F>) -> Self {
        Self {
            present: fields.into_iter().collect(),
        }
    }

    /// Whether a field was found in the input
    #[must_use]
    pub fn contains(&self, field: F) -> bool {
        self.present.contains(&field)
    }

    /// Number of present fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.present.len()
    }

    /// Whether no field was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }
}
