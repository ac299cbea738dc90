//! Academic performance and admissions scoring for college counseling.
//!
//! The crate is a synchronous computation library: callers hand in plain course and evaluation
//! records and read back GPA aggregates, admissions totals, and report view models.

pub mod academics;
pub mod admissions;
pub mod config;
pub mod error;
pub mod report;
pub mod telemetry;

pub use academics::{
    aggregate, aggregate_by_year, course_points, gpa_point, Course, CourseType, GpaScale,
    GpaScope, GpaSummary, GradeLevel, GradeType,
};
pub use admissions::{
    AdmissionScoringEngine, Criterion, Evaluation, EvaluationOutcome, ScoreBreakdown,
    UniversityType,
};
pub use error::{AppError, InvalidArgument};
