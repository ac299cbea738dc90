use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Course, CourseType, GradeMark, GradeType, SpecialGrade};
use super::scale::{
    letter_points, letter_points_plus, percent_points, percent_points_plus, GpaScale,
};

/// Result of converting one course under one scale, with the reason it does or does not count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Conversion {
    Converted { points: f64 },
    /// Excluded from both numerator and denominator.
    Special { grade: SpecialGrade },
    /// The grade string could not be read. Counts as zero, but the zero carries no confidence
    /// and should be surfaced to the reader as such.
    NoConfidenceZero,
    /// Letter-graded course on the 100-point scale; excluded rather than coerced to zero.
    NotApplicable,
}

impl Conversion {
    /// Value this course contributes to an average, if it contributes at all.
    pub fn contribution(&self) -> Option<f64> {
        match self {
            Conversion::Converted { points } => Some(*points),
            Conversion::NoConfidenceZero => Some(0.0),
            Conversion::Special { .. } | Conversion::NotApplicable => None,
        }
    }

    pub fn is_special(&self) -> bool {
        matches!(self, Conversion::Special { .. })
    }
}

/// Point value of a single grade on `scale`.
///
/// Special tokens and unreadable grades return `0`; callers must leave special tokens out of
/// their denominators (see [`convert`] for the distinction). Returns `None` only for a
/// letter-graded course on [`GpaScale::HundredPoint`], which has no 100-point value.
pub fn gpa_point(
    grade: &str,
    course_type: CourseType,
    grade_type: GradeType,
    scale: GpaScale,
) -> Option<f64> {
    match convert_mark(
        GradeMark::classify(grade, grade_type),
        course_type,
        grade_type,
        scale,
    ) {
        Conversion::Converted { points } => Some(points),
        Conversion::Special { .. } | Conversion::NoConfidenceZero => Some(0.0),
        Conversion::NotApplicable => None,
    }
}

pub fn convert(course: &Course, scale: GpaScale) -> Conversion {
    let conversion = convert_mark(course.mark(), course.course_type, course.grade_type, scale);
    if conversion == Conversion::NoConfidenceZero {
        debug!(
            course = %course.name,
            grade = %course.grade,
            grade_type = course.grade_type.label(),
            "unreadable grade counted as a no-confidence zero"
        );
    }
    conversion
}

fn convert_mark(
    mark: GradeMark,
    course_type: CourseType,
    grade_type: GradeType,
    scale: GpaScale,
) -> Conversion {
    if let GradeMark::Special(grade) = mark {
        return Conversion::Special { grade };
    }

    if scale == GpaScale::HundredPoint {
        return match (grade_type, mark) {
            (GradeType::Letter, _) => Conversion::NotApplicable,
            (GradeType::HundredPoint, GradeMark::Percentage(percent)) => {
                Conversion::Converted { points: percent }
            }
            (GradeType::HundredPoint, _) => Conversion::NoConfidenceZero,
        };
    }

    let base = match mark {
        GradeMark::Letter(letter) if scale.uses_plus_table() => letter_points_plus(letter),
        GradeMark::Letter(letter) => letter_points(letter),
        GradeMark::Percentage(percent) if scale.uses_plus_table() => percent_points_plus(percent),
        GradeMark::Percentage(percent) => percent_points(percent),
        GradeMark::Unreadable | GradeMark::Special(_) => return Conversion::NoConfidenceZero,
    };

    Conversion::Converted {
        points: base + scale.bonus(course_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(grade: &str, course_type: CourseType, grade_type: GradeType, scale: GpaScale) -> f64 {
        gpa_point(grade, course_type, grade_type, scale).expect("scale applies")
    }

    #[test]
    fn weighted_adds_general_bonus() {
        assert_eq!(
            point("A", CourseType::Regular, GradeType::Letter, GpaScale::Weighted4),
            4.0
        );
        assert_eq!(
            point("A", CourseType::Honors, GradeType::Letter, GpaScale::Weighted4),
            4.5
        );
        assert_eq!(
            point("B+", CourseType::ApIb, GradeType::Letter, GpaScale::Weighted4),
            4.3
        );
    }

    #[test]
    fn unweighted_and_college_ignore_course_type() {
        for scale in [
            GpaScale::Unweighted4,
            GpaScale::College4_0,
            GpaScale::College4_33,
        ] {
            assert_eq!(
                point("B", CourseType::ApIb, GradeType::Letter, scale),
                point("B", CourseType::Regular, GradeType::Letter, scale)
            );
        }
    }

    #[test]
    fn uc_bonus_treats_honors_like_ap() {
        let regular = point("A", CourseType::Regular, GradeType::Letter, GpaScale::UcWeighted);
        let honors = point("A", CourseType::Honors, GradeType::Letter, GpaScale::UcWeighted);
        let weighted_regular =
            point("A", CourseType::Regular, GradeType::Letter, GpaScale::Weighted4);
        let weighted_honors =
            point("A", CourseType::Honors, GradeType::Letter, GpaScale::Weighted4);
        assert_eq!(honors - regular, 1.0);
        assert_eq!(weighted_honors - weighted_regular, 0.5);
    }

    #[test]
    fn hundred_point_grades_use_bands() {
        assert_eq!(
            point("85", CourseType::Regular, GradeType::HundredPoint, GpaScale::Weighted4),
            3.0
        );
        assert_eq!(
            point("97", CourseType::Regular, GradeType::HundredPoint, GpaScale::College4_33),
            4.33
        );
        assert_eq!(
            point("96", CourseType::Regular, GradeType::HundredPoint, GpaScale::College4_33),
            4.0
        );
        assert_eq!(
            point("A+", CourseType::Regular, GradeType::Letter, GpaScale::College4_33),
            4.33
        );
        assert_eq!(
            point("A+", CourseType::Regular, GradeType::Letter, GpaScale::College4_0),
            4.0
        );
    }

    #[test]
    fn hundred_point_scale_returns_raw_percentage_or_nothing() {
        assert_eq!(
            gpa_point("88.5", CourseType::Honors, GradeType::HundredPoint, GpaScale::HundredPoint),
            Some(88.5)
        );
        assert_eq!(
            gpa_point("A", CourseType::Regular, GradeType::Letter, GpaScale::HundredPoint),
            None
        );
        assert_eq!(
            gpa_point("1e3", CourseType::Regular, GradeType::HundredPoint, GpaScale::HundredPoint),
            Some(0.0)
        );
    }

    #[test]
    fn special_and_unreadable_grades_read_as_zero() {
        for scale in GpaScale::ALL {
            assert_eq!(
                gpa_point("In Progress", CourseType::ApIb, GradeType::HundredPoint, scale),
                Some(0.0)
            );
        }
        assert_eq!(
            gpa_point("eighty", CourseType::ApIb, GradeType::HundredPoint, GpaScale::Weighted4),
            Some(0.0)
        );
    }

    #[test]
    fn convert_distinguishes_why_a_zero_was_produced() {
        let dropped = Course::new("Art", "Drop", GradeType::Letter, CourseType::Regular);
        assert_eq!(
            convert(&dropped, GpaScale::Weighted4),
            Conversion::Special {
                grade: SpecialGrade::Drop
            }
        );
        assert_eq!(convert(&dropped, GpaScale::Weighted4).contribution(), None);

        let garbled = Course::new("Art", "9O", GradeType::HundredPoint, CourseType::Regular);
        let conversion = convert(&garbled, GpaScale::Unweighted4);
        assert_eq!(conversion, Conversion::NoConfidenceZero);
        assert_eq!(conversion.contribution(), Some(0.0));

        let failing = Course::new("Art", "F", GradeType::Letter, CourseType::Honors);
        assert_eq!(
            convert(&failing, GpaScale::Weighted4),
            Conversion::Converted { points: 0.5 }
        );
    }
}
