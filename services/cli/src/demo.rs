use crate::infra::print_json;
use chrono::{Local, NaiveDate};
use clap::Args;
use counsel_ai::academics::{Course, CourseType, GradeLevel, GradeType};
use counsel_ai::admissions::{Criterion, CriterionScore, Evaluation, UniversityType};
use counsel_ai::config::AppConfig;
use counsel_ai::error::AppError;
use counsel_ai::report::StudentReport;
use tracing::info;

const DEMO_STUDENT: &str = "Avery Chen";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the report date (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the report view as JSON instead of a text summary.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let courses = demo_courses();
    let evaluations = demo_evaluations(today);

    let report = StudentReport::build(
        DEMO_STUDENT,
        &courses,
        &evaluations,
        &config.report.scales,
        today,
    );
    info!(
        courses = courses.len(),
        evaluations = evaluations.len(),
        "demo report built"
    );

    if args.json {
        return print_json(&report);
    }

    render_report(&report);
    Ok(())
}

fn render_report(report: &StudentReport) {
    println!("Student report: {}", report.student);
    println!("Generated on: {}", report.generated_on);

    println!("\nGPA");
    for row in &report.gpa_table {
        println!(
            "  {:<22} overall {:>6}  ({} courses)",
            row.scale_label, row.overall, row.counted_courses
        );
        for year in &row.by_year {
            println!("    {:<20} {:>6}", year.academic_year, year.gpa);
        }
    }

    println!("\nCourses");
    for course in &report.courses {
        let points: Vec<String> = course.points.iter().map(|cell| cell.points.clone()).collect();
        println!(
            "  {:<24} {:<4} {:<8} {:<12} {}",
            course.name,
            course.grade,
            course.course_type_label,
            course.status_label,
            points.join(" / ")
        );
    }

    for warning in &report.warnings {
        println!("  Warning: {warning}");
    }

    for evaluation in &report.evaluations {
        println!(
            "\nAdmissions: {} total {} (core {}/{}, traditional {}/{})",
            evaluation.university_label,
            evaluation.total_label,
            evaluation.core_total,
            evaluation.core_max,
            evaluation.traditional_total,
            evaluation.traditional_max
        );
        for line in &evaluation.criteria {
            let marker = if line.counted { ' ' } else { '-' };
            println!(
                "  {marker} {:<20} {}  {}",
                line.label,
                line.score,
                line.description.as_deref().unwrap_or("not considered")
            );
        }
        for remark in &evaluation.remarks {
            println!("  Note: {remark}");
        }
    }
}

fn demo_courses() -> Vec<Course> {
    use CourseType::{ApIb, Honors, Regular};
    use GradeLevel::{Eleventh, Ninth, Tenth, Twelfth};
    use GradeType::{HundredPoint, Letter};

    let rows = [
        ("English 9", "A-", Letter, Regular, Ninth, "2021-2022"),
        ("Algebra II", "B+", Letter, Honors, Ninth, "2021-2022"),
        ("World History", "94", HundredPoint, Regular, Tenth, "2022-2023"),
        ("Chemistry", "A", Letter, Honors, Tenth, "2022-2023"),
        ("AP US History", "A", Letter, ApIb, Eleventh, "2023-2024"),
        ("AP Calculus AB", "A-", Letter, ApIb, Eleventh, "2023-2024"),
        ("Spanish III", "P/F", Letter, Regular, Eleventh, "2023-2024"),
        ("AP Physics C", "In Progress", Letter, ApIb, Twelfth, "2024-2025"),
    ];

    rows.into_iter()
        .map(|(name, grade, grade_type, course_type, level, year)| {
            Course::new(name, grade, grade_type, course_type)
                .with_grade_level(level)
                .with_academic_year(year)
        })
        .collect()
}

fn demo_evaluations(today: NaiveDate) -> Vec<Evaluation> {
    let mut ivy = Evaluation::uniform(UniversityType::IvyLeague, CriterionScore::new(2));
    ivy.set_score(Criterion::UniqueNarrative, CriterionScore::new(3));
    ivy.set_score(Criterion::Athletics, CriterionScore::new(5));
    ivy.student_id = Some("demo-001".to_string());
    ivy.evaluated_on = Some(today);

    let mut uc = Evaluation::uniform(UniversityType::UcSystem, CriterionScore::new(2));
    uc.set_score(Criterion::AcademicExcellence, CriterionScore::BEST);
    uc.set_score(Criterion::Interview, CriterionScore::WORST);
    uc.student_id = Some("demo-001".to_string());
    uc.evaluated_on = Some(today);
    uc.notes = Some("Interview not offered by UC campuses".to_string());

    vec![ivy, uc]
}
