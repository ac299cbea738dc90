use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::views::{
    CoursePointCell, CourseRow, CourseStatus, CriterionLine, EvaluationView, GpaTableRow,
    GpaYearCell,
};
use crate::academics::{
    course_points, Conversion, Course, GpaScale, GpaSummary, GradeMark, SpecialGrade,
};
use crate::admissions::{AdmissionScoringEngine, Evaluation};

/// Display text for a value that does not apply on a scale.
pub const NOT_APPLICABLE: &str = "N/A";

/// Two decimals, or [`NOT_APPLICABLE`] when there is no value.
pub fn format_gpa(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.2}"),
        None => NOT_APPLICABLE.to_string(),
    }
}

/// Everything a student report renders, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentReport {
    pub student: String,
    pub generated_on: NaiveDate,
    pub gpa_table: Vec<GpaTableRow>,
    pub courses: Vec<CourseRow>,
    pub evaluations: Vec<EvaluationView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl StudentReport {
    pub fn build(
        student: impl Into<String>,
        courses: &[Course],
        evaluations: &[Evaluation],
        scales: &[GpaScale],
        generated_on: NaiveDate,
    ) -> Self {
        let student = student.into();
        let summary = GpaSummary::build(courses, scales);

        let gpa_table = summary
            .scales
            .iter()
            .map(|row| GpaTableRow {
                scale: row.scale,
                scale_label: row.scale.label(),
                overall: format_gpa(row.overall),
                by_year: row
                    .by_year
                    .iter()
                    .map(|year| GpaYearCell {
                        academic_year: year.academic_year.clone(),
                        gpa: format_gpa(year.gpa),
                    })
                    .collect(),
                counted_courses: row.counted_courses,
                no_confidence_courses: row.no_confidence_courses,
            })
            .collect();

        let warnings = courses
            .iter()
            .filter(|course| matches!(course.mark(), GradeMark::Unreadable))
            .map(|course| {
                format!(
                    "{}: grade '{}' could not be read and counts as 0",
                    course.name, course.grade
                )
            })
            .collect();

        let engine = AdmissionScoringEngine::new();
        let evaluations: Vec<EvaluationView> = evaluations
            .iter()
            .map(|evaluation| evaluation_view(&engine, evaluation))
            .collect();

        debug!(
            student = %student,
            courses = courses.len(),
            evaluations = evaluations.len(),
            "student report built"
        );

        Self {
            student,
            generated_on,
            gpa_table,
            courses: course_rows(courses, scales),
            evaluations,
            warnings,
        }
    }
}

fn course_rows(courses: &[Course], scales: &[GpaScale]) -> Vec<CourseRow> {
    let per_scale: Vec<_> = scales
        .iter()
        .map(|&scale| (scale, course_points(courses, scale)))
        .collect();

    courses
        .iter()
        .enumerate()
        .map(|(index, course)| {
            let status = course_status(course);
            let points = per_scale
                .iter()
                .map(|(scale, points)| {
                    let point = &points[index];
                    CoursePointCell {
                        scale: *scale,
                        points: match point.conversion {
                            Conversion::Special { .. } => NOT_APPLICABLE.to_string(),
                            _ => format_gpa(point.points),
                        },
                        counted: point.counted,
                    }
                })
                .collect();

            CourseRow {
                name: course.name.clone(),
                grade: course.grade.clone(),
                grade_type: course.grade_type,
                grade_type_label: course.grade_type.label(),
                course_type: course.course_type,
                course_type_label: course.course_type.label(),
                grade_level: course.grade_level.map(|level| level.number()),
                academic_year: course.academic_year.clone(),
                status,
                status_label: status.label(),
                points,
            }
        })
        .collect()
}

fn course_status(course: &Course) -> CourseStatus {
    match course.mark() {
        GradeMark::Special(SpecialGrade::InProgress) => CourseStatus::InProgress,
        GradeMark::Special(SpecialGrade::PassFail) => CourseStatus::PassFail,
        GradeMark::Special(SpecialGrade::Drop) => CourseStatus::Dropped,
        GradeMark::Unreadable => CourseStatus::Unreadable,
        GradeMark::Letter(_) | GradeMark::Percentage(_) => CourseStatus::Graded,
    }
}

fn evaluation_view(engine: &AdmissionScoringEngine, evaluation: &Evaluation) -> EvaluationView {
    let outcome = engine.evaluate(evaluation);
    let total_label = outcome.total_label();

    EvaluationView {
        university_type: outcome.university_type,
        university_label: outcome.university_type.label(),
        core_total: outcome.breakdown.core_total,
        core_max: outcome.core_max,
        traditional_total: outcome.breakdown.traditional_total,
        traditional_max: outcome.traditional_max,
        total_score: outcome.breakdown.total_score,
        max_possible: outcome.max_possible,
        total_label,
        criteria: outcome
            .components
            .into_iter()
            .map(|component| CriterionLine {
                criterion: component.criterion,
                label: component.label,
                score: component.score,
                counted: component.counted,
                description: component.description,
            })
            .collect(),
        evaluated_on: evaluation.evaluated_on,
        notes: evaluation.notes.clone(),
        remarks: outcome.remarks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::academics::{CourseType, GradeLevel, GradeType};
    use crate::admissions::{Criterion, CriterionScore, UniversityType};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
    }

    fn courses() -> Vec<Course> {
        vec![
            Course::new("AP Calculus", "A", GradeType::Letter, CourseType::ApIb)
                .with_grade_level(GradeLevel::Eleventh)
                .with_academic_year("2023-2024"),
            Course::new("Biology", "B+", GradeType::Letter, CourseType::Regular)
                .with_grade_level(GradeLevel::Ninth)
                .with_academic_year("2021-2022"),
            Course::new("Art", "In Progress", GradeType::Letter, CourseType::Regular)
                .with_grade_level(GradeLevel::Twelfth)
                .with_academic_year("2024-2025"),
            Course::new("Chemistry", "??", GradeType::Letter, CourseType::Regular)
                .with_grade_level(GradeLevel::Tenth)
                .with_academic_year("2022-2023"),
        ]
    }

    #[test]
    fn format_gpa_uses_two_decimals_or_na() {
        assert_eq!(format_gpa(Some(4.1)), "4.10");
        assert_eq!(format_gpa(Some(88.75)), "88.75");
        assert_eq!(format_gpa(Some(0.0)), "0.00");
        assert_eq!(format_gpa(None), "N/A");
    }

    #[test]
    fn gpa_table_marks_letter_grades_on_hundred_point_scale_as_na() {
        let report = StudentReport::build(
            "Jordan Lee",
            &courses(),
            &[],
            &[GpaScale::Unweighted4, GpaScale::HundredPoint],
            day(),
        );

        assert_eq!(report.gpa_table.len(), 2);
        let unweighted = &report.gpa_table[0];
        assert_eq!(unweighted.scale_label, GpaScale::Unweighted4.label());
        // A (4.0), B+ (3.3), unreadable (0.0) over three counted courses.
        assert_eq!(unweighted.overall, "2.43");
        assert_eq!(unweighted.no_confidence_courses, 1);

        assert_eq!(report.gpa_table[1].overall, "N/A");
    }

    #[test]
    fn course_rows_carry_status_and_per_scale_points() {
        let report = StudentReport::build(
            "Jordan Lee",
            &courses(),
            &[],
            &[GpaScale::Weighted4, GpaScale::UcWeighted],
            day(),
        );

        let calculus = &report.courses[0];
        assert_eq!(calculus.status, CourseStatus::Graded);
        assert_eq!(calculus.grade_level, Some(11));
        assert_eq!(calculus.points[0].points, "5.00");
        assert!(calculus.points[1].counted);

        let biology = &report.courses[1];
        assert_eq!(biology.points[1].points, "3.30");
        assert!(!biology.points[1].counted);

        let art = &report.courses[2];
        assert_eq!(art.status_label, "In Progress");
        assert!(art.points.iter().all(|cell| cell.points == "N/A" && !cell.counted));

        let chemistry = &report.courses[3];
        assert_eq!(chemistry.status, CourseStatus::Unreadable);
        assert_eq!(chemistry.points[0].points, "0.00");
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("Chemistry"));
    }

    #[test]
    fn evaluation_views_show_totals_and_remarks() {
        let mut evaluation = Evaluation::uniform(UniversityType::UcSystem, CriterionScore::NEUTRAL);
        evaluation.set_score(Criterion::Interview, CriterionScore::BEST);
        evaluation.notes = Some("Strong PIQ drafts".to_string());

        let report = StudentReport::build(
            "Jordan Lee",
            &[],
            &[evaluation],
            &[GpaScale::UcWeighted],
            day(),
        );

        let view = &report.evaluations[0];
        assert_eq!(view.university_label, "UC System");
        assert_eq!(view.total_label, "24/48");
        assert_eq!(view.traditional_max, 30);
        assert_eq!(view.criteria.len(), 9);
        assert_eq!(view.notes.as_deref(), Some("Strong PIQ drafts"));
        assert!(!view.remarks.is_empty());
        assert_eq!(report.gpa_table[0].overall, "0.00");
    }

    #[test]
    fn report_serializes_to_json() {
        let report = StudentReport::build(
            "Jordan Lee",
            &courses(),
            &[Evaluation::uniform(UniversityType::IvyLeague, CriterionScore::NEUTRAL)],
            &[GpaScale::Weighted4],
            day(),
        );

        let value = serde_json::to_value(&report).expect("report serializes");
        assert_eq!(value["student"], "Jordan Lee");
        assert_eq!(value["generated_on"], "2024-05-01");
        assert_eq!(value["evaluations"][0]["total_label"], "27/54");
        assert_eq!(value["courses"][2]["status"], "in_progress");
    }
}
