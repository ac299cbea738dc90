use proptest::prelude::*;

use crate::academics::{
    aggregate, gpa_point, Course, CourseType, GpaScale, GpaScope, GradeLevel, GradeType,
};

const GRADES: &[&str] = &[
    "A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "D-", "F", "100", "97", "93.5",
    "88", "85", "79", "71", "64", "42", "abc", "150", "-5", "1e3", "Fail",
];

const SPECIAL: &[&str] = &["In Progress", "Pass/Fail", "Drop"];

const YEARS: &[&str] = &["2022-2023", "2023-2024", "2024-2025"];

fn course_type() -> impl Strategy<Value = CourseType> {
    prop_oneof![
        Just(CourseType::Regular),
        Just(CourseType::Honors),
        Just(CourseType::ApIb),
    ]
}

fn grade_type() -> impl Strategy<Value = GradeType> {
    prop_oneof![Just(GradeType::Letter), Just(GradeType::HundredPoint)]
}

fn scale() -> impl Strategy<Value = GpaScale> {
    prop::sample::select(GpaScale::ALL.to_vec())
}

fn scope() -> impl Strategy<Value = GpaScope> {
    prop_oneof![
        Just(GpaScope::Overall),
        prop::sample::select(YEARS.to_vec()).prop_map(GpaScope::year),
    ]
}

fn course_with(grades: &'static [&'static str]) -> impl Strategy<Value = Course> {
    (
        prop::sample::select(grades.to_vec()),
        grade_type(),
        course_type(),
        prop::option::of(9u8..=12),
        prop::option::of(prop::sample::select(YEARS.to_vec())),
    )
        .prop_map(|(grade, grade_type, course_type, level, year)| Course {
            id: None,
            name: format!("Course {grade}"),
            grade: grade.to_string(),
            grade_type,
            course_type,
            grade_level: level.and_then(GradeLevel::from_number),
            academic_year: year.map(str::to_string),
        })
}

proptest! {
    #[test]
    fn aggregate_ignores_course_order(
        (courses, shuffled) in prop::collection::vec(course_with(GRADES), 0..12)
            .prop_flat_map(|courses| (Just(courses.clone()), Just(courses).prop_shuffle())),
        scale in scale(),
        scope in scope(),
    ) {
        prop_assert_eq!(
            aggregate(&courses, scale, &scope),
            aggregate(&shuffled, scale, &scope)
        );
    }

    #[test]
    fn special_grades_never_move_an_aggregate(
        courses in prop::collection::vec(course_with(GRADES), 0..8),
        specials in prop::collection::vec(course_with(SPECIAL), 1..4),
        scale in scale(),
        scope in scope(),
    ) {
        let mut padded = courses.clone();
        padded.extend(specials);
        prop_assert_eq!(
            aggregate(&courses, scale, &scope),
            aggregate(&padded, scale, &scope)
        );
    }

    #[test]
    fn unweighted_scales_ignore_course_type(
        grade in prop::sample::select(GRADES.to_vec()),
        grade_type in grade_type(),
        course_type in course_type(),
    ) {
        for scale in [GpaScale::Unweighted4, GpaScale::College4_0, GpaScale::College4_33] {
            prop_assert_eq!(
                gpa_point(grade, course_type, grade_type, scale),
                gpa_point(grade, CourseType::Regular, grade_type, scale)
            );
        }
    }

    #[test]
    fn point_scales_stay_within_their_nominal_maximum(
        courses in prop::collection::vec(course_with(GRADES), 0..10),
        scale in scale(),
    ) {
        if let Some(value) = aggregate(&courses, scale, &GpaScope::Overall) {
            prop_assert!(value >= 0.0);
            prop_assert!(value <= scale.nominal_max());
        }
    }
}
