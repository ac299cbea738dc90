//! Grade conversion and GPA aggregation across the supported scales.

mod aggregate;
mod convert;
pub mod domain;
pub mod import;
mod scale;

#[cfg(test)]
mod tests;

pub use aggregate::{
    aggregate, aggregate_by_year, course_points, CoursePoint, GpaScope, GpaSummary,
    ScaleSummary, YearGpa,
};
pub use convert::{convert, gpa_point, Conversion};
pub use domain::{Course, CourseType, GradeLevel, GradeMark, GradeType, LetterGrade, SpecialGrade};
pub use scale::GpaScale;
