use super::catalog::AdmissionCriteriaCatalog;
use super::domain::{Criterion, Evaluation, UniversityType};
use super::policy::UniversityPolicy;
use super::{ScoreBreakdown, ScoreComponent};

/// Athletics ratings at or past this mark get a report remark for Ivy League and Top 20-30.
const ATHLETICS_REMARK_THRESHOLD: u8 = 4;

pub(crate) fn breakdown(evaluation: &Evaluation, policy: &UniversityPolicy) -> ScoreBreakdown {
    let core_total = Criterion::CORE
        .iter()
        .map(|criterion| u32::from(evaluation.score(*criterion).value()))
        .sum();
    let traditional_total = policy
        .traditional
        .iter()
        .map(|criterion| u32::from(evaluation.score(*criterion).value()))
        .sum();

    ScoreBreakdown::new(core_total, traditional_total)
}

pub(crate) fn score_components(
    evaluation: &Evaluation,
    policy: &UniversityPolicy,
    catalog: &AdmissionCriteriaCatalog,
) -> Vec<ScoreComponent> {
    Criterion::CORE
        .into_iter()
        .chain(Criterion::TRADITIONAL)
        .map(|criterion| {
            let score = evaluation.score(criterion);
            ScoreComponent {
                criterion,
                label: criterion.label().to_string(),
                score: score.value(),
                counted: policy.counts(criterion),
                description: catalog
                    .describe(evaluation.university_type, criterion, score.value())
                    .map(str::to_string),
            }
        })
        .collect()
}

/// Display-only remarks. None of these change the totals.
pub(crate) fn remarks(evaluation: &Evaluation, policy: &UniversityPolicy) -> Vec<String> {
    let mut remarks = Vec::new();

    if !policy.counts(Criterion::Interview) {
        remarks.push(format!(
            "Interview is not considered for {} and is excluded from the total and maximum.",
            evaluation.university_type.label()
        ));
    }

    let athletics = evaluation.traditional.athletics.value();
    if evaluation.university_type != UniversityType::UcSystem
        && athletics >= ATHLETICS_REMARK_THRESHOLD
    {
        remarks.push(format!(
            "Athletics rated {athletics}: typically not a deciding factor for {} admissions, \
             but still counted in the total.",
            evaluation.university_type.label()
        ));
    }

    remarks
}
