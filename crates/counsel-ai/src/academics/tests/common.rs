use crate::academics::domain::{Course, CourseType, GradeLevel, GradeType};

pub(super) fn letter(name: &str, grade: &str, course_type: CourseType) -> Course {
    Course::new(name, grade, GradeType::Letter, course_type)
}

pub(super) fn percent(name: &str, grade: &str, course_type: CourseType) -> Course {
    Course::new(name, grade, GradeType::HundredPoint, course_type)
}

pub(super) fn placed(course: Course, level: GradeLevel, year: &str) -> Course {
    course.with_grade_level(level).with_academic_year(year)
}

/// Three years of a typical transcript plus an unscheduled summer course.
pub(super) fn transcript() -> Vec<Course> {
    vec![
        placed(
            letter("English 9", "A", CourseType::Regular),
            GradeLevel::Ninth,
            "2022-2023",
        ),
        placed(
            letter("Algebra II Honors", "B+", CourseType::Honors),
            GradeLevel::Ninth,
            "2022-2023",
        ),
        placed(
            percent("Chemistry Honors", "91", CourseType::Honors),
            GradeLevel::Tenth,
            "2023-2024",
        ),
        placed(
            letter("World History", "A-", CourseType::Regular),
            GradeLevel::Tenth,
            "2023-2024",
        ),
        placed(
            letter("Ceramics", "Pass/Fail", CourseType::Regular),
            GradeLevel::Tenth,
            "2023-2024",
        ),
        placed(
            letter("AP Biology", "A", CourseType::ApIb),
            GradeLevel::Eleventh,
            "2024-2025",
        ),
        placed(
            letter("AP Language", "B", CourseType::ApIb),
            GradeLevel::Eleventh,
            "2024-2025",
        ),
        placed(
            letter("Spanish III", "In Progress", CourseType::Regular),
            GradeLevel::Eleventh,
            "2024-2025",
        ),
        letter("Summer Geometry", "A", CourseType::Regular).with_grade_level(GradeLevel::Tenth),
    ]
}
