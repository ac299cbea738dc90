use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{CourseType, LetterGrade};
use crate::error::InvalidArgument;

/// Named GPA conversion policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpaScale {
    Weighted4,
    Unweighted4,
    UcWeighted,
    #[serde(rename = "college4_0")]
    College4_0,
    #[serde(rename = "college4_33")]
    College4_33,
    HundredPoint,
}

impl GpaScale {
    pub const ALL: [GpaScale; 6] = [
        GpaScale::Weighted4,
        GpaScale::Unweighted4,
        GpaScale::UcWeighted,
        GpaScale::College4_0,
        GpaScale::College4_33,
        GpaScale::HundredPoint,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            GpaScale::Weighted4 => "Weighted GPA (4.0)",
            GpaScale::Unweighted4 => "Unweighted GPA (4.0)",
            GpaScale::UcWeighted => "UC GPA (weighted, 10-12)",
            GpaScale::College4_0 => "College GPA (4.0)",
            GpaScale::College4_33 => "College GPA (4.33)",
            GpaScale::HundredPoint => "100-Point Average",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GpaScale::Weighted4 => "weighted4",
            GpaScale::Unweighted4 => "unweighted4",
            GpaScale::UcWeighted => "uc_weighted",
            GpaScale::College4_0 => "college4_0",
            GpaScale::College4_33 => "college4_33",
            GpaScale::HundredPoint => "hundred_point",
        }
    }

    /// Highest value a single course can convert to on this scale.
    pub const fn nominal_max(self) -> f64 {
        match self {
            GpaScale::Weighted4 | GpaScale::UcWeighted => 5.0,
            GpaScale::Unweighted4 | GpaScale::College4_0 => 4.0,
            GpaScale::College4_33 => 4.33,
            GpaScale::HundredPoint => 100.0,
        }
    }

    /// Course-type bonus added on top of the base letter value.
    pub const fn bonus(self, course_type: CourseType) -> f64 {
        match self {
            GpaScale::Weighted4 => match course_type {
                CourseType::Regular => 0.0,
                CourseType::Honors => 0.5,
                CourseType::ApIb => 1.0,
            },
            GpaScale::UcWeighted => match course_type {
                CourseType::Regular => 0.0,
                CourseType::Honors | CourseType::ApIb => 1.0,
            },
            GpaScale::Unweighted4
            | GpaScale::College4_0
            | GpaScale::College4_33
            | GpaScale::HundredPoint => 0.0,
        }
    }

    pub(crate) const fn uses_plus_table(self) -> bool {
        matches!(self, GpaScale::College4_33)
    }
}

impl fmt::Display for GpaScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GpaScale {
    type Err = InvalidArgument;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key: String = value
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "weighted4" | "weighted" => Ok(Self::Weighted4),
            "unweighted4" | "unweighted" => Ok(Self::Unweighted4),
            "ucweighted" | "uc" => Ok(Self::UcWeighted),
            "college40" => Ok(Self::College4_0),
            "college433" => Ok(Self::College4_33),
            "hundredpoint" | "100point" => Ok(Self::HundredPoint),
            _ => Err(InvalidArgument::new("gpa scale", value.trim())),
        }
    }
}

/// Letter values shared by every 4.0-based scale.
pub(crate) const fn letter_points(grade: LetterGrade) -> f64 {
    match grade {
        LetterGrade::APlus | LetterGrade::A => 4.0,
        LetterGrade::AMinus => 3.7,
        LetterGrade::BPlus => 3.3,
        LetterGrade::B => 3.0,
        LetterGrade::BMinus => 2.7,
        LetterGrade::CPlus => 2.3,
        LetterGrade::C => 2.0,
        LetterGrade::CMinus => 1.7,
        LetterGrade::DPlus => 1.3,
        LetterGrade::D => 1.0,
        LetterGrade::DMinus => 0.7,
        LetterGrade::F => 0.0,
    }
}

/// The 4.33 table only differs at the top.
pub(crate) const fn letter_points_plus(grade: LetterGrade) -> f64 {
    match grade {
        LetterGrade::APlus => 4.33,
        other => letter_points(other),
    }
}

/// Percentage breakpoints, highest first. The 97 row is kept separate so the 4.33 scale can
/// lift it.
const PERCENT_BANDS: [(f64, f64); 12] = [
    (97.0, 4.0),
    (93.0, 4.0),
    (90.0, 3.7),
    (87.0, 3.3),
    (83.0, 3.0),
    (80.0, 2.7),
    (77.0, 2.3),
    (73.0, 2.0),
    (70.0, 1.7),
    (67.0, 1.3),
    (63.0, 1.0),
    (60.0, 0.7),
];

pub(crate) fn percent_points(percent: f64) -> f64 {
    PERCENT_BANDS
        .iter()
        .find(|(floor, _)| percent >= *floor)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}

pub(crate) fn percent_points_plus(percent: f64) -> f64 {
    if percent >= 97.0 {
        4.33
    } else {
        percent_points(percent)
    }
}
