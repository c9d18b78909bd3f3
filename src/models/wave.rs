//! Per-wave survey records
//!
//! A wave file becomes a vector of typed records. Wave 1 carries the full
//! set of analysis items; the follow-up waves carry only the status codes and
//! the repeated career-planning items.

use std::fmt;

use log::warn;

use crate::error::Result;
use crate::loader::WaveTable;
use crate::schema::fields::{FollowUpField, Wave1Field};
use crate::schema::variables::VariableCatalog;
use crate::utils::arrow::extractors::{NumericColumn, extract_subject_ids};

/// One annual round of the panel survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Wave {
    /// Initial wave, the source of NEET status
    First,
    /// First follow-up
    Second,
    /// Second follow-up
    Third,
}

impl Wave {
    /// All waves in survey order
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    /// Waves used to derive the outcome
    pub const FOLLOW_UPS: [Self; 2] = [Self::Second, Self::Third];

    /// One-based wave number
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    /// Years elapsed since wave 1
    #[must_use]
    pub const fn year_offset(self) -> i64 {
        self.number() as i64 - 1
    }
}

impl fmt::Display for Wave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wave {}", self.number())
    }
}

/// Subject identifier linking a person's records across waves
///
/// Integral numeric IDs are normalized to their integer rendering so that a
/// column read as `1.0` in one wave links with `1` in another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(String);

impl SubjectId {
    /// Parse a raw cell value; blank cells carry no ID
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let normalized = match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 => {
                format!("{}", value as i64)
            }
            _ => trimmed.to_string(),
        };
        Some(Self(normalized))
    }

    /// The normalized ID text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for SubjectId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<i32> for SubjectId {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Career-planning items repeated in every wave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareerItem {
    /// Clarity of the respondent's career plan
    PlanClarity,
    /// Difficulty making career decisions
    DecisionDifficulty,
    /// Career indecision
    Indecision,
    /// Not knowing one's own aptitude
    UnknownAptitude,
}

impl CareerItem {
    /// All items in column order
    pub const ALL: [Self; 4] = [
        Self::PlanClarity,
        Self::DecisionDifficulty,
        Self::Indecision,
        Self::UnknownAptitude,
    ];

    const fn slot(self) -> usize {
        match self {
            Self::PlanClarity => 0,
            Self::DecisionDifficulty => 1,
            Self::Indecision => 2,
            Self::UnknownAptitude => 3,
        }
    }
}

/// Values of the four career-planning items for one wave
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CareerScores([Option<f64>; 4]);

impl CareerScores {
    /// Value of one item
    #[must_use]
    pub fn get(&self, item: CareerItem) -> Option<f64> {
        self.0[item.slot()]
    }

    /// Set the value of one item
    pub fn set(&mut self, item: CareerItem, value: Option<f64>) {
        self.0[item.slot()] = value;
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, item: CareerItem, value: f64) -> Self {
        self.set(item, Some(value));
        self
    }
}

/// Economic-activity and student-status codes of one wave
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCodes {
    /// Economic activity code (1 employed, 2 unemployed, 3 inactive)
    pub econ_activity: Option<i64>,
    /// Student status code (1 student, 2 not a student)
    pub student_status: Option<i64>,
}

impl StatusCodes {
    /// Status codes from known values
    #[must_use]
    pub fn new(econ_activity: i64, student_status: i64) -> Self {
        Self {
            econ_activity: Some(econ_activity),
            student_status: Some(student_status),
        }
    }
}

/// A wave-1 record with every analysis item
#[derive(Debug, Clone, PartialEq)]
pub struct Wave1Record {
    /// Subject ID
    pub subject_id: SubjectId,
    /// Wave-1 status codes
    pub status: StatusCodes,
    pub gender: Option<i64>,
    pub birth_year: Option<i64>,
    pub education: Option<i64>,
    pub region: Option<i64>,
    pub health: Option<i64>,
    /// Whether the respondent has work experience (1 yes, 2 no)
    pub had_experience: Option<i64>,
    pub experience_type: Option<i64>,
    pub career_guidance: Option<i64>,
    /// Wave-1 career-planning items
    pub career: CareerScores,
    /// The three self-efficacy items
    pub self_efficacy: [Option<f64>; 3],
    pub father_education: Option<i64>,
    pub mother_education: Option<i64>,
    /// "Has no financial assets" flag (1 affirmative)
    pub no_assets: Option<i64>,
    /// Raw financial asset amount, before sentinel handling
    pub asset_amount: Option<f64>,
    pub search_method: Option<i64>,
    pub search_difficulty: Option<i64>,
    /// Job-search duration in months
    pub search_duration: Option<f64>,
    /// Number of applications made
    pub search_count: Option<f64>,
}

impl Wave1Record {
    /// Minimal record with an ID and wave-1 status codes
    #[must_use]
    pub fn new(subject_id: impl Into<SubjectId>, econ_activity: i64, student_status: i64) -> Self {
        Self {
            subject_id: subject_id.into(),
            status: StatusCodes::new(econ_activity, student_status),
            gender: None,
            birth_year: None,
            education: None,
            region: None,
            health: None,
            had_experience: None,
            experience_type: None,
            career_guidance: None,
            career: CareerScores::default(),
            self_efficacy: [None; 3],
            father_education: None,
            mother_education: None,
            no_assets: None,
            asset_amount: None,
            search_method: None,
            search_difficulty: None,
            search_duration: None,
            search_count: None,
        }
    }

    /// Convert a loaded wave-1 table into records
    ///
    /// Rows without a subject ID cannot be linked and are skipped.
    pub fn from_table(table: &WaveTable<Wave1Field>, catalog: &VariableCatalog) -> Result<Vec<Self>> {
        let batch = &table.batch;
        let column = |field: Wave1Field| NumericColumn::from_batch(batch, field.column(catalog));

        let ids = extract_subject_ids(batch, &catalog.subject_id)?;
        let econ = column(Wave1Field::EconActivity)?;
        let student = column(Wave1Field::StudentStatus)?;
        let gender = column(Wave1Field::Gender)?;
        let birth_year = column(Wave1Field::BirthYear)?;
        let education = column(Wave1Field::Education)?;
        let region = column(Wave1Field::Region)?;
        let health = column(Wave1Field::Health)?;
        let had_experience = column(Wave1Field::HadExperience)?;
        let experience_type = column(Wave1Field::ExperienceType)?;
        let career_guidance = column(Wave1Field::CareerGuidance)?;
        let career = CareerItem::ALL
            .iter()
            .map(|&item| Ok((item, column(Wave1Field::Career(item))?)))
            .collect::<Result<Vec<_>>>()?;
        let efficacy = [
            column(Wave1Field::SelfEfficacy(0))?,
            column(Wave1Field::SelfEfficacy(1))?,
            column(Wave1Field::SelfEfficacy(2))?,
        ];
        let father_education = column(Wave1Field::FatherEducation)?;
        let mother_education = column(Wave1Field::MotherEducation)?;
        let no_assets = column(Wave1Field::NoAssets)?;
        let asset_amount = column(Wave1Field::AssetAmount)?;
        let search_method = column(Wave1Field::SearchMethod)?;
        let search_difficulty = column(Wave1Field::SearchDifficulty)?;
        let search_duration = column(Wave1Field::SearchDuration)?;
        let search_count = column(Wave1Field::SearchCount)?;

        let mut records = Vec::with_capacity(ids.len());
        for (row, id) in ids.into_iter().enumerate() {
            let Some(subject_id) = id else {
                warn!("Skipping {} row {row}: no subject ID", table.wave);
                continue;
            };

            let mut scores = CareerScores::default();
            for (item, values) in &career {
                scores.set(*item, values.value(row));
            }

            records.push(Self {
                subject_id,
                status: StatusCodes {
                    econ_activity: econ.code(row),
                    student_status: student.code(row),
                },
                gender: gender.code(row),
                birth_year: birth_year.code(row),
                education: education.code(row),
                region: region.code(row),
                health: health.code(row),
                had_experience: had_experience.code(row),
                experience_type: experience_type.code(row),
                career_guidance: career_guidance.code(row),
                career: scores,
                self_efficacy: [
                    efficacy[0].value(row),
                    efficacy[1].value(row),
                    efficacy[2].value(row),
                ],
                father_education: father_education.code(row),
                mother_education: mother_education.code(row),
                no_assets: no_assets.code(row),
                asset_amount: asset_amount.value(row),
                search_method: search_method.code(row),
                search_difficulty: search_difficulty.code(row),
                search_duration: search_duration.value(row),
                search_count: search_count.value(row),
            });
        }

        Ok(records)
    }
}

/// A follow-up (wave 2 or 3) record
#[derive(Debug, Clone, PartialEq)]
pub struct FollowUpRecord {
    /// Subject ID
    pub subject_id: SubjectId,
    /// Status codes in this wave
    pub status: StatusCodes,
    /// Career-planning items repeated in this wave
    pub career: CareerScores,
}

impl FollowUpRecord {
    /// Minimal record with an ID and an economic-activity code
    #[must_use]
    pub fn new(subject_id: impl Into<SubjectId>, econ_activity: i64) -> Self {
        Self {
            subject_id: subject_id.into(),
            status: StatusCodes {
                econ_activity: Some(econ_activity),
                student_status: None,
            },
            career: CareerScores::default(),
        }
    }

    /// Convert a loaded follow-up table into records
    pub fn from_table(table: &WaveTable<FollowUpField>, catalog: &VariableCatalog) -> Result<Vec<Self>> {
        let batch = &table.batch;
        let wave = table.wave;
        let column = |field: FollowUpField| NumericColumn::from_batch(batch, field.column(catalog, wave));

        let ids = extract_subject_ids(batch, &catalog.subject_id)?;
        let econ = column(FollowUpField::EconActivity)?;
        let student = column(FollowUpField::StudentStatus)?;
        let career = CareerItem::ALL
            .iter()
            .map(|&item| Ok((item, column(FollowUpField::Career(item))?)))
            .collect::<Result<Vec<_>>>()?;

        let mut records = Vec::with_capacity(ids.len());
        for (row, id) in ids.into_iter().enumerate() {
            let Some(subject_id) = id else {
                warn!("Skipping {wave} row {row}: no subject ID");
                continue;
            };

            let mut scores = CareerScores::default();
            for (item, values) in &career {
                scores.set(*item, values.value(row));
            }

            records.push(Self {
                subject_id,
                status: StatusCodes {
                    econ_activity: econ.code(row),
                    student_status: student.code(row),
                },
                career: scores,
            });
        }

        Ok(records)
    }
}
