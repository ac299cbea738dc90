use proptest::prelude::*;

use crate::admissions::{max_possible, score, Criterion, CriterionScore, Evaluation, UniversityType};

fn university_type() -> impl Strategy<Value = UniversityType> {
    prop::sample::select(UniversityType::ALL.to_vec())
}

fn evaluations(raw: std::ops::RangeInclusive<i64>) -> impl Strategy<Value = Evaluation> {
    (university_type(), prop::collection::vec(raw, 9)).prop_map(|(university_type, ratings)| {
        let mut evaluation = Evaluation::uniform(university_type, CriterionScore::NEUTRAL);
        for (criterion, raw) in Criterion::CORE
            .into_iter()
            .chain(Criterion::TRADITIONAL)
            .zip(ratings)
        {
            evaluation.set_score(criterion, CriterionScore::new(raw));
        }
        evaluation
    })
}

proptest! {
    #[test]
    fn totals_stay_within_policy_bounds(evaluation in evaluations(-20..=20)) {
        let breakdown = score(&evaluation);
        let policy = evaluation.university_type.policy();

        prop_assert!((3..=18).contains(&breakdown.core_total));
        prop_assert!(breakdown.total_score <= max_possible(&evaluation));
        prop_assert!(breakdown.total_score >= policy.min_possible());
        prop_assert_eq!(
            breakdown.total_score,
            breakdown.core_total + breakdown.traditional_total
        );
    }

    #[test]
    fn uc_interview_never_moves_the_total(
        evaluation in evaluations(1..=6),
        interview in 1i64..=6,
    ) {
        let mut uc = evaluation;
        uc.university_type = UniversityType::UcSystem;
        let before = (score(&uc), max_possible(&uc));

        uc.set_score(Criterion::Interview, CriterionScore::new(interview));
        prop_assert_eq!(before, (score(&uc), max_possible(&uc)));
    }
}
