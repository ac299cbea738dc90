use crate::demo::{run_demo, DemoArgs};
use crate::infra::{load_evaluations, print_json};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use counsel_ai::academics::import::load_courses;
use counsel_ai::academics::{aggregate, GpaScale, GpaScope, GpaSummary};
use counsel_ai::admissions::AdmissionScoringEngine;
use counsel_ai::config::AppConfig;
use counsel_ai::error::AppError;
use counsel_ai::report::StudentReport;
use counsel_ai::telemetry;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "counsel-ai",
    about = "Compute GPAs, admissions scores, and student reports from counseling records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate a transcript CSV on one or more GPA scales
    Gpa(GpaArgs),
    /// Score admissions evaluations from a JSON file
    Admissions(AdmissionsArgs),
    /// Build the full student report view
    Report(ReportArgs),
    /// Print a report built from bundled sample records
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
pub(crate) struct GpaArgs {
    /// Transcript CSV (Course, Grade, Grade Type, Course Type, Grade Level, Academic Year)
    #[arg(long)]
    pub(crate) transcript: PathBuf,
    /// Scale to compute; repeat for several. Defaults to the configured report scales.
    #[arg(long = "scale")]
    pub(crate) scales: Vec<GpaScale>,
    /// Restrict the aggregate to one academic year key, e.g. 2023-2024
    #[arg(long)]
    pub(crate) year: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct AdmissionsArgs {
    /// JSON file holding one evaluation or an array of evaluations
    #[arg(long)]
    pub(crate) evaluation: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Student name shown on the report
    #[arg(long)]
    pub(crate) student: String,
    #[arg(long)]
    pub(crate) transcript: PathBuf,
    /// Optional JSON file of admissions evaluations
    #[arg(long)]
    pub(crate) evaluations: Option<PathBuf>,
    /// Report date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct ScopedGpa {
    scale: GpaScale,
    label: &'static str,
    scope: GpaScope,
    gpa: Option<f64>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "counsel-ai starting");

    match cli.command {
        Command::Gpa(args) => run_gpa(args, &config),
        Command::Admissions(args) => run_admissions(args),
        Command::Report(args) => run_report(args, &config),
        Command::Demo(args) => run_demo(args, &config),
    }
}

fn run_gpa(args: GpaArgs, config: &AppConfig) -> Result<(), AppError> {
    let courses = load_courses(&args.transcript)?;
    let scales = if args.scales.is_empty() {
        config.report.scales.clone()
    } else {
        args.scales
    };
    info!(courses = courses.len(), scales = scales.len(), "transcript loaded");

    match args.year {
        Some(year) => {
            let scope = GpaScope::year(year);
            let rows: Vec<ScopedGpa> = scales
                .iter()
                .map(|&scale| ScopedGpa {
                    scale,
                    label: scale.label(),
                    scope: scope.clone(),
                    gpa: aggregate(&courses, scale, &scope),
                })
                .collect();
            print_json(&rows)
        }
        None => print_json(&GpaSummary::build(&courses, &scales)),
    }
}

fn run_admissions(args: AdmissionsArgs) -> Result<(), AppError> {
    let evaluations = load_evaluations(&args.evaluation)?;
    let engine = AdmissionScoringEngine::new();
    let outcomes: Vec<_> = evaluations
        .iter()
        .map(|evaluation| engine.evaluate(evaluation))
        .collect();
    info!(evaluations = outcomes.len(), "evaluations scored");
    print_json(&outcomes)
}

fn run_report(args: ReportArgs, config: &AppConfig) -> Result<(), AppError> {
    let ReportArgs {
        student,
        transcript,
        evaluations,
        today,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let courses = load_courses(&transcript)?;
    let evaluations = match evaluations {
        Some(path) => load_evaluations(&path)?,
        None => Vec::new(),
    };

    let report = StudentReport::build(
        student,
        &courses,
        &evaluations,
        &config.report.scales,
        today,
    );
    info!(student = %report.student, "student report generated");
    print_json(&report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpa_accepts_repeated_scales() {
        let cli = Cli::try_parse_from([
            "counsel-ai",
            "gpa",
            "--transcript",
            "transcript.csv",
            "--scale",
            "weighted4",
            "--scale",
            "uc_weighted",
            "--year",
            "2023-2024",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Gpa(args) => {
                assert_eq!(args.scales, vec![GpaScale::Weighted4, GpaScale::UcWeighted]);
                assert_eq!(args.year.as_deref(), Some("2023-2024"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn report_rejects_malformed_dates() {
        let parsed = Cli::try_parse_from([
            "counsel-ai",
            "report",
            "--student",
            "Jordan Lee",
            "--transcript",
            "transcript.csv",
            "--today",
            "05/01/2024",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_scale_is_rejected() {
        let parsed = Cli::try_parse_from([
            "counsel-ai",
            "gpa",
            "--transcript",
            "transcript.csv",
            "--scale",
            "weighted9",
        ]);
        assert!(parsed.is_err());
    }
}
