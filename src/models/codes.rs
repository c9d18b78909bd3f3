//! Survey code tables
//!
//! Every coded survey variable is mapped through a static table from its
//! integer code to an enum variant. Lookups never fail: a code outside the
//! table becomes [`Coded::Unmapped`] and a null value becomes
//! [`Coded::Missing`].

use serde::Deserialize;

/// Language used when rendering labels into the output table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English labels
    #[default]
    En,
    /// Korean labels, as in the survey codebook
    Ko,
}

/// A variant of a static code table
pub trait Label: Sized + Copy {
    /// Look up the variant for a survey code
    fn from_code(code: i64) -> Option<Self>;

    /// Human-readable label in the given locale
    fn label(self, locale: Locale) -> &'static str;
}

/// Convert a numeric cell into a survey code
///
/// Only finite integral values are codes; `2.0` is code 2, `2.5` is nothing.
#[must_use]
pub fn code_from_value(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        Some(value as i64)
    } else {
        None
    }
}

/// Result of looking a survey code up in a code table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coded<T> {
    /// The code is in the table
    Mapped(T),
    /// A code was recorded but the table has no entry for it
    Unmapped(i64),
    /// No code was recorded
    Missing,
}

impl<T: Label> Coded<T> {
    /// Look up an optional code
    #[must_use]
    pub fn lookup(code: Option<i64>) -> Self {
        match code {
            None => Self::Missing,
            Some(code) => T::from_code(code).map_or(Self::Unmapped(code), Self::Mapped),
        }
    }

    /// The mapped variant, if any
    #[must_use]
    pub fn mapped(self) -> Option<T> {
        match self {
            Self::Mapped(value) => Some(value),
            Self::Unmapped(_) | Self::Missing => None,
        }
    }

    /// Label of the mapped variant; unmapped and missing codes have no label
    #[must_use]
    pub fn label(self, locale: Locale) -> Option<&'static str> {
        self.mapped().map(|value| value.label(locale))
    }

    /// Label of the mapped variant, or the sentinel label otherwise
    #[must_use]
    pub fn label_or(self, sentinel: Sentinel, locale: Locale) -> &'static str {
        self.label(locale).unwrap_or_else(|| sentinel.label(locale))
    }
}

/// Placeholder labels for coded answers that carry no usable response.
///
/// These are written as real text (not null) so that frequency counts can
/// exclude them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// The respondent gave no usable answer
    NoResponse,
    /// The question did not apply to the respondent
    NotApplicable,
}

impl Sentinel {
    /// Label in the given locale
    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::NoResponse, Locale::En) => "no response",
            (Self::NoResponse, Locale::Ko) => "무응답",
            (Self::NotApplicable, Locale::En) => "not applicable",
            (Self::NotApplicable, Locale::Ko) => "해당 없음",
        }
    }
}

/// Declare a code table enum with its codes and labels.
///
/// Variants are listed in canonical order; `ALL` and the derived `Ord`
/// follow that order.
macro_rules! code_table {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $code:literal => ($en:literal, $ko:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                #[doc = $en]
                $variant
            ),+
        }

        impl $name {
            /// All variants in canonical order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Survey code of this variant
            #[must_use]
            pub const fn code(self) -> i64 {
                match self {
                    $(Self::$variant => $code),+
                }
            }
        }

        impl Label for $name {
            fn from_code(code: i64) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn label(self, locale: Locale) -> &'static str {
                match locale {
                    Locale::En => match self {
                        $(Self::$variant => $en),+
                    },
                    Locale::Ko => match self {
                        $(Self::$variant => $ko),+
                    },
                }
            }
        }
    };
}

code_table! {
    /// Economic activity status
    EconActivity {
        Employed = 1 => ("employed", "취업자"),
        Unemployed = 2 => ("unemployed", "실업자"),
        Inactive = 3 => ("economically inactive", "비경제활동인구"),
    }
}

code_table! {
    /// Student status
    StudentStatus {
        Student = 1 => ("student", "학생"),
        NotStudent = 2 => ("not a student", "학생 아님"),
    }
}

code_table! {
    /// Gender
    Gender {
        Male = 1 => ("male", "남성"),
        Female = 2 => ("female", "여성"),
    }
}

code_table! {
    /// Highest completed education, ordered low to high
    Education {
        BelowHighSchool = 1 => ("below high school", "고졸 미만"),
        HighSchool = 2 => ("high school", "고졸"),
        JuniorCollege = 3 => ("junior college", "전문대졸"),
        University = 4 => ("university", "대졸"),
        GraduateSchool = 5 => ("graduate school", "대학원졸"),
    }
}

code_table! {
    /// Region of residence
    Region {
        Seoul = 1 => ("Seoul", "서울"),
        Busan = 2 => ("Busan", "부산"),
        Daegu = 3 => ("Daegu", "대구"),
        Incheon = 4 => ("Incheon", "인천"),
        Gwangju = 5 => ("Gwangju", "광주"),
        Daejeon = 6 => ("Daejeon", "대전"),
        Ulsan = 7 => ("Ulsan", "울산"),
        Gyeonggi = 8 => ("Gyeonggi", "경기"),
        Gangwon = 9 => ("Gangwon", "강원"),
        Chungbuk = 10 => ("Chungbuk", "충북"),
        Chungnam = 11 => ("Chungnam", "충남"),
        Jeonbuk = 12 => ("Jeonbuk", "전북"),
        Jeonnam = 13 => ("Jeonnam", "전남"),
        Gyeongbuk = 14 => ("Gyeongbuk", "경북"),
        Gyeongnam = 15 => ("Gyeongnam", "경남"),
        Jeju = 16 => ("Jeju", "제주"),
        Sejong = 17 => ("Sejong", "세종"),
    }
}

code_table! {
    /// Self-rated health, ordered worst to best
    Health {
        VeryPoor = 1 => ("very poor", "매우 나쁨"),
        Poor = 2 => ("poor", "나쁜 편"),
        Fair = 3 => ("fair", "보통"),
        Good = 4 => ("good", "좋은 편"),
        VeryGood = 5 => ("very good", "매우 좋음"),
    }
}

code_table! {
    /// Whether the respondent received career guidance
    CareerGuidance {
        Received = 1 => ("has guidance", "있음"),
        NotReceived = 2 => ("no guidance", "없음"),
    }
}

code_table! {
    /// Parent's highest completed education, ordered low to high
    ParentEducation {
        NoSchooling = 1 => ("no schooling", "무학"),
        Elementary = 2 => ("elementary school", "초졸"),
        Middle = 3 => ("middle school", "중졸"),
        High = 4 => ("high school", "고졸"),
        JuniorCollege = 5 => ("junior college", "전문대졸"),
        University = 6 => ("university", "대졸"),
        GraduateSchool = 7 => ("graduate school", "대학원졸"),
    }
}

code_table! {
    /// Main job-search method
    JobSearchMethod {
        PublicService = 1 => ("public employment service", "공공 고용서비스"),
        PrivateAgency = 2 => ("private agency or job portal", "민간 취업알선/구직사이트"),
        Referral = 3 => ("referral by family or friends", "가족/지인 소개"),
        School = 4 => ("school or teacher", "학교/선생님"),
        DirectApplication = 5 => ("direct application", "직접 지원"),
        Other = 6 => ("other", "기타"),
    }
}

code_table! {
    /// Main difficulty encountered while searching for a job
    SearchDifficulty {
        NoMatchingJobs = 1 => ("no jobs matching skills", "적성에 맞는 일자리 부족"),
        PoorConditions = 2 => ("low wages or poor conditions", "낮은 임금/열악한 근로조건"),
        LackOfExperience = 3 => ("lack of experience or skills", "경력/기술 부족"),
        LackOfInformation = 4 => ("lack of job information", "취업정보 부족"),
        Discrimination = 5 => ("age or gender discrimination", "나이/성별 차별"),
        Other = 6 => ("other", "기타"),
    }
}

/// Work-experience category derived from the experience items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceType {
    /// No work experience reported
    NoExperience,
    /// Internship or school fieldwork
    InternshipFieldwork,
    /// Part-time job
    PartTime,
    /// Started a business
    Startup,
    /// Any other experience
    Other,
}

impl ExperienceType {
    /// Label in the given locale
    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Self::NoExperience => "no experience",
                Self::InternshipFieldwork => "internship/fieldwork",
                Self::PartTime => "part-time",
                Self::Startup => "startup",
                Self::Other => "other",
            },
            Locale::Ko => match self {
                Self::NoExperience => "경험 없음",
                Self::InternshipFieldwork => "인턴/현장실습",
                Self::PartTime => "아르바이트",
                Self::Startup => "창업 경험",
                Self::Other => "기타",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_from_value() {
        assert_eq!(code_from_value(2.0), Some(2));
        assert_eq!(code_from_value(2.5), None);
        assert_eq!(code_from_value(f64::NAN), None);
    }

    #[test]
    fn test_lookup_variants() {
        assert_eq!(Coded::<Gender>::lookup(Some(1)), Coded::Mapped(Gender::Male));
        assert_eq!(Coded::<Gender>::lookup(Some(9)), Coded::Unmapped(9));
        assert_eq!(Coded::<Gender>::lookup(None), Coded::Missing);
        assert_eq!(Coded::<Gender>::lookup(Some(9)).label(Locale::En), None);
    }

    #[test]
    fn test_sentinel_labels_are_not_null() {
        let method = Coded::<JobSearchMethod>::lookup(None);
        assert_eq!(method.label_or(Sentinel::NoResponse, Locale::En), "no response");

        let difficulty = Coded::<SearchDifficulty>::lookup(Some(42));
        assert_eq!(
            difficulty.label_or(Sentinel::NotApplicable, Locale::Ko),
            "해당 없음"
        );
    }

    #[test]
    fn test_ordered_tables() {
        assert_eq!(Education::ALL.first(), Some(&Education::BelowHighSchool));
        assert_eq!(Education::ALL.last(), Some(&Education::GraduateSchool));
        assert_eq!(Health::ALL.first(), Some(&Health::VeryPoor));
        assert!(ParentEducation::University > ParentEducation::High);
        assert_eq!(Region::ALL.len(), 17);
        assert_eq!(Region::Sejong.code(), 17);
    }

    #[test]
    fn test_korean_labels() {
        assert_eq!(Gender::Female.label(Locale::Ko), "여성");
        assert_eq!(Education::HighSchool.label(Locale::Ko), "고졸");
        assert_eq!(ExperienceType::PartTime.label(Locale::Ko), "아르바이트");
    }
}
