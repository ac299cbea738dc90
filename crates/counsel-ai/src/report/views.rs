use chrono::NaiveDate;
use serde::Serialize;

use crate::academics::{CourseType, GpaScale, GradeType};
use crate::admissions::{Criterion, UniversityType};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaYearCell {
    pub academic_year: String,
    pub gpa: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaTableRow {
    pub scale: GpaScale,
    pub scale_label: &'static str,
    pub overall: String,
    pub by_year: Vec<GpaYearCell>,
    pub counted_courses: usize,
    pub no_confidence_courses: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoursePointCell {
    pub scale: GpaScale,
    pub points: String,
    pub counted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Graded,
    InProgress,
    PassFail,
    Dropped,
    Unreadable,
}

impl CourseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Graded => "Graded",
            Self::InProgress => "In Progress",
            Self::PassFail => "Pass/Fail",
            Self::Dropped => "Dropped",
            Self::Unreadable => "Unreadable grade, counted as 0",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRow {
    pub name: String,
    pub grade: String,
    pub grade_type: GradeType,
    pub grade_type_label: &'static str,
    pub course_type: CourseType,
    pub course_type_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<String>,
    pub status: CourseStatus,
    pub status_label: &'static str,
    pub points: Vec<CoursePointCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionLine {
    pub criterion: Criterion,
    pub label: String,
    pub score: u8,
    pub counted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationView {
    pub university_type: UniversityType,
    pub university_label: &'static str,
    pub core_total: u32,
    pub core_max: u32,
    pub traditional_total: u32,
    pub traditional_max: u32,
    pub total_score: u32,
    pub max_possible: u32,
    pub total_label: String,
    pub criteria: Vec<CriterionLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluated_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remarks: Vec<String>,
}
