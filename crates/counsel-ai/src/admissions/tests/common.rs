use crate::admissions::{CriterionScore, Evaluation, UniversityType};

pub(super) fn rating(value: i64) -> CriterionScore {
    CriterionScore::new(value)
}

pub(super) fn uniform(university_type: UniversityType, value: i64) -> Evaluation {
    Evaluation::uniform(university_type, rating(value))
}
