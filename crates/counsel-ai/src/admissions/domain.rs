use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::error::InvalidArgument;

/// Policy selector deciding which criteria count and what the maximum is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UniversityType {
    #[serde(rename = "ivy_league", alias = "IvyLeague", alias = "Ivy League")]
    IvyLeague,
    #[serde(rename = "top30", alias = "Top30", alias = "Top 20-30")]
    Top30,
    #[serde(rename = "uc_system", alias = "UCSystem", alias = "UC System")]
    UcSystem,
}

impl UniversityType {
    pub const ALL: [UniversityType; 3] = [
        UniversityType::IvyLeague,
        UniversityType::Top30,
        UniversityType::UcSystem,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            UniversityType::IvyLeague => "Ivy League",
            UniversityType::Top30 => "Top 20-30",
            UniversityType::UcSystem => "UC System",
        }
    }
}

impl fmt::Display for UniversityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UniversityType {
    type Err = InvalidArgument;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key: String = value
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "ivyleague" | "ivy" => Ok(Self::IvyLeague),
            "top30" | "top2030" | "top20" => Ok(Self::Top30),
            "ucsystem" | "uc" => Ok(Self::UcSystem),
            _ => Err(InvalidArgument::new("university type", value.trim())),
        }
    }
}

/// The nine admissions evaluation dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    AcademicExcellence,
    ImpactLeadership,
    UniqueNarrative,
    Academics,
    Extracurriculars,
    Athletics,
    PersonalQualities,
    Recommendations,
    Interview,
}

impl Criterion {
    pub const CORE: [Criterion; 3] = [
        Criterion::AcademicExcellence,
        Criterion::ImpactLeadership,
        Criterion::UniqueNarrative,
    ];

    pub const TRADITIONAL: [Criterion; 6] = [
        Criterion::Academics,
        Criterion::Extracurriculars,
        Criterion::Athletics,
        Criterion::PersonalQualities,
        Criterion::Recommendations,
        Criterion::Interview,
    ];

    pub const fn is_core(self) -> bool {
        matches!(
            self,
            Criterion::AcademicExcellence | Criterion::ImpactLeadership | Criterion::UniqueNarrative
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            Criterion::AcademicExcellence => "Academic Excellence",
            Criterion::ImpactLeadership => "Impact & Leadership",
            Criterion::UniqueNarrative => "Unique Narrative",
            Criterion::Academics => "Academics",
            Criterion::Extracurriculars => "Extracurriculars",
            Criterion::Athletics => "Athletics",
            Criterion::PersonalQualities => "Personal Qualities",
            Criterion::Recommendations => "Recommendations",
            Criterion::Interview => "Interview",
        }
    }
}

/// A criterion rating on the 1 (best) to 6 (weakest) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CriterionScore(u8);

impl CriterionScore {
    pub const BEST: CriterionScore = CriterionScore(1);
    pub const NEUTRAL: CriterionScore = CriterionScore(3);
    pub const WORST: CriterionScore = CriterionScore(6);

    /// Out-of-range ratings are clamped to the nearest bound so a malformed record can never
    /// push a total past the policy maximum.
    pub fn new(raw: i64) -> Self {
        let clamped = raw.clamp(Self::BEST.0 as i64, Self::WORST.0 as i64);
        if clamped != raw {
            warn!(raw, clamped, "criterion score outside 1-6 clamped");
        }
        Self(clamped as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for CriterionScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<u8> for CriterionScore {
    fn from(value: u8) -> Self {
        Self::new(i64::from(value))
    }
}

impl Serialize for CriterionScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for CriterionScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::new)
    }
}

/// Factors counted for every university type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreScores {
    pub academic_excellence: CriterionScore,
    pub impact_leadership: CriterionScore,
    pub unique_narrative: CriterionScore,
}

/// Legacy factors; `interview` is stored for every type but not counted for the UC system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraditionalScores {
    pub academics: CriterionScore,
    pub extracurriculars: CriterionScore,
    pub athletics: CriterionScore,
    pub personal_qualities: CriterionScore,
    pub recommendations: CriterionScore,
    #[serde(default)]
    pub interview: CriterionScore,
}

/// One counselor evaluation of a student against a university type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    pub university_type: UniversityType,
    #[serde(flatten)]
    pub core: CoreScores,
    #[serde(flatten)]
    pub traditional: TraditionalScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluated_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Evaluation {
    pub fn new(
        university_type: UniversityType,
        core: CoreScores,
        traditional: TraditionalScores,
    ) -> Self {
        Self {
            student_id: None,
            university_type,
            core,
            traditional,
            evaluated_on: None,
            notes: None,
        }
    }

    /// Every criterion set to the same rating.
    pub fn uniform(university_type: UniversityType, score: CriterionScore) -> Self {
        Self::new(
            university_type,
            CoreScores {
                academic_excellence: score,
                impact_leadership: score,
                unique_narrative: score,
            },
            TraditionalScores {
                academics: score,
                extracurriculars: score,
                athletics: score,
                personal_qualities: score,
                recommendations: score,
                interview: score,
            },
        )
    }

    pub fn score(&self, criterion: Criterion) -> CriterionScore {
        match criterion {
            Criterion::AcademicExcellence => self.core.academic_excellence,
            Criterion::ImpactLeadership => self.core.impact_leadership,
            Criterion::UniqueNarrative => self.core.unique_narrative,
            Criterion::Academics => self.traditional.academics,
            Criterion::Extracurriculars => self.traditional.extracurriculars,
            Criterion::Athletics => self.traditional.athletics,
            Criterion::PersonalQualities => self.traditional.personal_qualities,
            Criterion::Recommendations => self.traditional.recommendations,
            Criterion::Interview => self.traditional.interview,
        }
    }

    pub fn set_score(&mut self, criterion: Criterion, score: CriterionScore) {
        let slot = match criterion {
            Criterion::AcademicExcellence => &mut self.core.academic_excellence,
            Criterion::ImpactLeadership => &mut self.core.impact_leadership,
            Criterion::UniqueNarrative => &mut self.core.unique_narrative,
            Criterion::Academics => &mut self.traditional.academics,
            Criterion::Extracurriculars => &mut self.traditional.extracurriculars,
            Criterion::Athletics => &mut self.traditional.athletics,
            Criterion::PersonalQualities => &mut self.traditional.personal_qualities,
            Criterion::Recommendations => &mut self.traditional.recommendations,
            Criterion::Interview => &mut self.traditional.interview,
        };
        *slot = score;
    }
}
