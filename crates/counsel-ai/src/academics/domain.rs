use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::InvalidArgument;

/// One course line from a student's transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Letter token, numeric percentage, or one of the special tokens, interpreted according to
    /// `grade_type`.
    pub grade: String,
    pub grade_type: GradeType,
    #[serde(default)]
    pub course_type: CourseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<GradeLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<String>,
}

impl Course {
    pub fn new(
        name: impl Into<String>,
        grade: impl Into<String>,
        grade_type: GradeType,
        course_type: CourseType,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            grade: grade.into(),
            grade_type,
            course_type,
            grade_level: None,
            academic_year: None,
        }
    }

    pub fn with_grade_level(mut self, level: GradeLevel) -> Self {
        self.grade_level = Some(level);
        self
    }

    pub fn with_academic_year(mut self, year: impl Into<String>) -> Self {
        self.academic_year = Some(year.into());
        self
    }

    /// How the raw grade string reads under this course's grade type.
    pub fn mark(&self) -> GradeMark {
        GradeMark::classify(&self.grade, self.grade_type)
    }

    pub fn is_special(&self) -> bool {
        SpecialGrade::parse(&self.grade).is_some()
    }
}

/// Selects which conversion table applies to a course's grade string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeType {
    #[serde(rename = "letter", alias = "Letter")]
    Letter,
    #[serde(
        rename = "hundred_point",
        alias = "HundredPoint",
        alias = "100-point",
        alias = "100"
    )]
    HundredPoint,
}

impl GradeType {
    pub const fn label(self) -> &'static str {
        match self {
            GradeType::Letter => "Letter",
            GradeType::HundredPoint => "100-Point",
        }
    }
}

impl FromStr for GradeType {
    type Err = InvalidArgument;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_key(value).as_str() {
            "letter" | "lettergrade" => Ok(Self::Letter),
            "hundredpoint" | "100point" | "100" | "percentage" | "numeric" => {
                Ok(Self::HundredPoint)
            }
            _ => Err(InvalidArgument::new("grade type", value.trim())),
        }
    }
}

/// Course rigor, which contributes a scale-dependent bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    #[default]
    #[serde(rename = "regular", alias = "Regular")]
    Regular,
    #[serde(rename = "honors", alias = "Honors")]
    Honors,
    #[serde(rename = "ap_ib", alias = "APIB", alias = "AP/IB", alias = "AP", alias = "IB")]
    ApIb,
}

impl CourseType {
    pub const fn label(self) -> &'static str {
        match self {
            CourseType::Regular => "Regular",
            CourseType::Honors => "Honors",
            CourseType::ApIb => "AP/IB",
        }
    }
}

impl FromStr for CourseType {
    type Err = InvalidArgument;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_key(value).as_str() {
            "regular" | "standard" | "cp" => Ok(Self::Regular),
            "honors" | "honours" => Ok(Self::Honors),
            "apib" | "ap" | "ib" => Ok(Self::ApIb),
            _ => Err(InvalidArgument::new("course type", value.trim())),
        }
    }
}

/// High school class year of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GradeLevel {
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
}

impl GradeLevel {
    pub const fn number(self) -> u8 {
        match self {
            GradeLevel::Ninth => 9,
            GradeLevel::Tenth => 10,
            GradeLevel::Eleventh => 11,
            GradeLevel::Twelfth => 12,
        }
    }

    pub fn from_number(value: u8) -> Option<Self> {
        match value {
            9 => Some(Self::Ninth),
            10 => Some(Self::Tenth),
            11 => Some(Self::Eleventh),
            12 => Some(Self::Twelfth),
            _ => None,
        }
    }

    /// Whether the UC system counts courses from this year (10th through 12th grade).
    pub const fn uc_eligible(self) -> bool {
        !matches!(self, GradeLevel::Ninth)
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for GradeLevel {
    type Err = InvalidArgument;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(value);
        let key = key.strip_prefix("grade").unwrap_or(&key);
        let level = match key {
            "freshman" => Some(Self::Ninth),
            "sophomore" => Some(Self::Tenth),
            "junior" => Some(Self::Eleventh),
            "senior" => Some(Self::Twelfth),
            other => other
                .trim_end_matches("th")
                .parse::<u8>()
                .ok()
                .and_then(Self::from_number),
        };
        level.ok_or_else(|| InvalidArgument::new("grade level", value.trim()))
    }
}

impl Serialize for GradeLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for GradeLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u8),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Self::from_number(value).ok_or_else(|| {
                serde::de::Error::custom(InvalidArgument::new("grade level", value.to_string()))
            }),
            Raw::Text(value) => value.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Grade states that carry no GPA weight at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialGrade {
    InProgress,
    PassFail,
    Drop,
}

impl SpecialGrade {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_key(raw).as_str() {
            "inprogress" | "ip" => Some(Self::InProgress),
            "passfail" | "pf" => Some(Self::PassFail),
            "drop" | "dropped" => Some(Self::Drop),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SpecialGrade::InProgress => "In Progress",
            SpecialGrade::PassFail => "Pass/Fail",
            SpecialGrade::Drop => "Drop",
        }
    }
}

/// The thirteen letter grades on a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    DMinus,
    F,
}

impl LetterGrade {
    pub fn parse(raw: &str) -> Option<Self> {
        let token: String = raw
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();
        let grade = match token.as_str() {
            "A+" => Self::APlus,
            "A" => Self::A,
            "A-" => Self::AMinus,
            "B+" => Self::BPlus,
            "B" => Self::B,
            "B-" => Self::BMinus,
            "C+" => Self::CPlus,
            "C" => Self::C,
            "C-" => Self::CMinus,
            "D+" => Self::DPlus,
            "D" => Self::D,
            "D-" => Self::DMinus,
            "F" => Self::F,
            _ => return None,
        };
        Some(grade)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }
}

/// A course grade string read under its grade type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradeMark {
    Special(SpecialGrade),
    Letter(LetterGrade),
    Percentage(f64),
    /// Neither a known letter nor a number in 0-100; converts to a no-confidence zero.
    Unreadable,
}

impl GradeMark {
    pub fn classify(raw: &str, grade_type: GradeType) -> Self {
        if let Some(special) = SpecialGrade::parse(raw) {
            return Self::Special(special);
        }

        match grade_type {
            GradeType::Letter => LetterGrade::parse(raw)
                .map(Self::Letter)
                .unwrap_or(Self::Unreadable),
            GradeType::HundredPoint => match raw.trim().parse::<f64>() {
                Ok(value) if (0.0..=100.0).contains(&value) => Self::Percentage(value),
                _ => Self::Unreadable,
            },
        }
    }
}

fn normalize_key(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}
