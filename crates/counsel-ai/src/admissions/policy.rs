use serde::Serialize;

use super::domain::{Criterion, CriterionScore, UniversityType};

const IVY_TRADITIONAL: &[Criterion] = &Criterion::TRADITIONAL;

const UC_TRADITIONAL: &[Criterion] = &[
    Criterion::Academics,
    Criterion::Extracurriculars,
    Criterion::Athletics,
    Criterion::PersonalQualities,
    Criterion::Recommendations,
];

/// Which criteria a university type counts. Both the totals and the maximum are derived from
/// this one list so they cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UniversityPolicy {
    pub university_type: UniversityType,
    pub traditional: &'static [Criterion],
}

impl UniversityPolicy {
    pub const fn for_type(university_type: UniversityType) -> Self {
        let traditional = match university_type {
            UniversityType::IvyLeague | UniversityType::Top30 => IVY_TRADITIONAL,
            UniversityType::UcSystem => UC_TRADITIONAL,
        };
        Self {
            university_type,
            traditional,
        }
    }

    pub fn counts(&self, criterion: Criterion) -> bool {
        criterion.is_core() || self.traditional.contains(&criterion)
    }

    pub fn counted_criteria(&self) -> impl Iterator<Item = Criterion> + '_ {
        Criterion::CORE
            .into_iter()
            .chain(self.traditional.iter().copied())
    }

    pub const fn core_max(&self) -> u32 {
        Criterion::CORE.len() as u32 * CriterionScore::WORST.value() as u32
    }

    pub const fn traditional_max(&self) -> u32 {
        self.traditional.len() as u32 * CriterionScore::WORST.value() as u32
    }

    /// Core plus counted traditional maxima: 54 for Ivy League and Top 20-30, 48 for the UC
    /// system.
    pub const fn max_possible(&self) -> u32 {
        self.core_max() + self.traditional_max()
    }

    pub const fn min_possible(&self) -> u32 {
        (Criterion::CORE.len() + self.traditional.len()) as u32
            * CriterionScore::BEST.value() as u32
    }
}

impl UniversityType {
    pub const fn policy(self) -> UniversityPolicy {
        UniversityPolicy::for_type(self)
    }
}
