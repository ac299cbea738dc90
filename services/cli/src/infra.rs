use chrono::NaiveDate;
use counsel_ai::admissions::Evaluation;
use counsel_ai::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum EvaluationFile {
    Many(Vec<Evaluation>),
    One(Box<Evaluation>),
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_evaluations(raw: &str) -> Result<Vec<Evaluation>, AppError> {
    Ok(match serde_json::from_str(raw)? {
        EvaluationFile::Many(evaluations) => evaluations,
        EvaluationFile::One(evaluation) => vec![*evaluation],
    })
}

pub(crate) fn load_evaluations(path: &Path) -> Result<Vec<Evaluation>, AppError> {
    parse_evaluations(&fs::read_to_string(path)?)
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
