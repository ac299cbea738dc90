use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::convert::{convert, Conversion};
use super::domain::{Course, CourseType, GradeLevel, GradeMark, GradeType};
use super::scale::GpaScale;

/// Which courses an aggregate covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "year", rename_all = "snake_case")]
pub enum GpaScope {
    Overall,
    /// Courses whose academic year equals the key; courses without a year never match.
    AcademicYear(String),
}

impl GpaScope {
    pub fn year(key: impl Into<String>) -> Self {
        Self::AcademicYear(key.into())
    }

    fn includes(&self, course: &Course) -> bool {
        match self {
            GpaScope::Overall => true,
            GpaScope::AcademicYear(key) => course.academic_year.as_deref() == Some(key.as_str()),
        }
    }
}

/// Scale-specific eligibility applied on top of the scope. UC GPA only counts 10th through
/// 12th grade; a course with no recorded grade level cannot be shown eligible and is dropped.
fn eligible(course: &Course, scale: GpaScale) -> bool {
    match scale {
        GpaScale::UcWeighted => course
            .grade_level
            .map(GradeLevel::uc_eligible)
            .unwrap_or(false),
        _ => true,
    }
}

/// Mean GPA of the courses in `scope`, rounded to two decimals.
///
/// Special-token courses are left out entirely. Every scale except
/// [`GpaScale::HundredPoint`] always yields a value, `0.0` for an empty scope. The 100-point
/// average is `None` ("not applicable") when the scope is empty or contains any
/// letter-graded course.
pub fn aggregate(courses: &[Course], scale: GpaScale, scope: &GpaScope) -> Option<f64> {
    let conversions: Vec<Conversion> = courses
        .iter()
        .filter(|course| scope.includes(course) && eligible(course, scale))
        .map(|course| convert(course, scale))
        .filter(|conversion| !conversion.is_special())
        .collect();

    if scale == GpaScale::HundredPoint
        && (conversions.is_empty() || conversions.contains(&Conversion::NotApplicable))
    {
        debug!(
            ?scope,
            courses = conversions.len(),
            "100-point average not applicable"
        );
        return None;
    }

    let points: Vec<f64> = conversions
        .iter()
        .filter_map(Conversion::contribution)
        .collect();

    debug!(%scale, ?scope, courses = points.len(), "aggregated gpa");
    Some(mean(points))
}

/// Per-year aggregates, ordered by academic year key. Courses without a year are skipped.
pub fn aggregate_by_year(courses: &[Course], scale: GpaScale) -> Vec<YearGpa> {
    let years: BTreeSet<&str> = courses
        .iter()
        .filter_map(|course| course.academic_year.as_deref())
        .collect();

    years
        .into_iter()
        .map(|year| {
            let scope = GpaScope::year(year);
            YearGpa {
                academic_year: year.to_string(),
                gpa: aggregate(courses, scale, &scope),
            }
        })
        .collect()
}

/// Per-course conversions in input order, flagged with whether each one counts toward the
/// aggregates on `scale`.
pub fn course_points(courses: &[Course], scale: GpaScale) -> Vec<CoursePoint> {
    courses
        .iter()
        .map(|course| {
            let conversion = convert(course, scale);
            CoursePoint {
                name: course.name.clone(),
                grade: course.grade.clone(),
                grade_type: course.grade_type,
                course_type: course.course_type,
                grade_level: course.grade_level,
                academic_year: course.academic_year.clone(),
                points: conversion.contribution(),
                counted: eligible(course, scale) && conversion.contribution().is_some(),
                conversion,
            }
        })
        .collect()
}

fn mean(points: Vec<f64>) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let count = points.len();
    round2(sorted_sum(points) / count as f64)
}

/// Float addition is not associative, so the points are summed in sorted order. Aggregates
/// compare exactly equal however the courses are ordered; do not drop the sort.
pub(super) fn sorted_sum(mut points: Vec<f64>) -> f64 {
    points.sort_by(f64::total_cmp);
    points.iter().sum()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearGpa {
    pub academic_year: String,
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoursePoint {
    pub name: String,
    pub grade: String,
    pub grade_type: GradeType,
    pub course_type: CourseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<GradeLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<String>,
    pub points: Option<f64>,
    pub counted: bool,
    pub conversion: Conversion,
}

/// Overall and per-year GPA on one scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSummary {
    pub scale: GpaScale,
    pub label: String,
    pub overall: Option<f64>,
    pub by_year: Vec<YearGpa>,
    pub counted_courses: usize,
    pub no_confidence_courses: usize,
}

/// GPA on every requested scale; `overall` is the value callers cache on the student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaSummary {
    pub scales: Vec<ScaleSummary>,
}

impl GpaSummary {
    /// Logs each unreadable grade once here; per-conversion logging stays at debug level.
    pub fn build(courses: &[Course], scales: &[GpaScale]) -> Self {
        for course in courses
            .iter()
            .filter(|course| matches!(course.mark(), GradeMark::Unreadable))
        {
            warn!(
                course = %course.name,
                grade = %course.grade,
                grade_type = course.grade_type.label(),
                "unreadable grade counted as a no-confidence zero"
            );
        }

        let scales = scales
            .iter()
            .map(|&scale| {
                let points = course_points(courses, scale);
                ScaleSummary {
                    scale,
                    label: scale.label().to_string(),
                    overall: aggregate(courses, scale, &GpaScope::Overall),
                    by_year: aggregate_by_year(courses, scale),
                    counted_courses: points.iter().filter(|point| point.counted).count(),
                    no_confidence_courses: points
                        .iter()
                        .filter(|point| {
                            point.counted && point.conversion == Conversion::NoConfidenceZero
                        })
                        .count(),
                }
            })
            .collect();

        Self { scales }
    }

    pub fn scale(&self, scale: GpaScale) -> Option<&ScaleSummary> {
        self.scales.iter().find(|summary| summary.scale == scale)
    }

    pub fn overall(&self, scale: GpaScale) -> Option<f64> {
        self.scale(scale).and_then(|summary| summary.overall)
    }
}
