use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

use super::domain::{Course, CourseType, GradeLevel, GradeType};
use crate::error::InvalidArgument;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read transcript: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid transcript CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("transcript row {row}: {source}")]
    Field {
        row: usize,
        #[source]
        source: InvalidArgument,
    },
}

/// Reads a transcript export with the headers
/// `Course,Grade,Grade Type,Course Type,Grade Level,Academic Year`.
///
/// `Course Type`, `Grade Level`, and `Academic Year` may be blank. `Grade Type` defaults to
/// letter grades when blank.
pub fn parse_courses<R: Read>(reader: R) -> Result<Vec<Course>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut courses = Vec::new();

    for (index, record) in csv_reader.deserialize::<TranscriptRow>().enumerate() {
        let row = record?;
        let course = row
            .into_course()
            .map_err(|source| ImportError::Field {
                row: index + 1,
                source,
            })?;
        courses.push(course);
    }

    Ok(courses)
}

pub fn load_courses(path: impl AsRef<Path>) -> Result<Vec<Course>, ImportError> {
    let file = std::fs::File::open(path)?;
    parse_courses(file)
}

#[derive(Debug, Deserialize)]
struct TranscriptRow {
    #[serde(rename = "Course", default)]
    name: String,
    #[serde(rename = "Grade")]
    grade: String,
    #[serde(
        rename = "Grade Type",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    grade_type: Option<String>,
    #[serde(
        rename = "Course Type",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    course_type: Option<String>,
    #[serde(
        rename = "Grade Level",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    grade_level: Option<String>,
    #[serde(
        rename = "Academic Year",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    academic_year: Option<String>,
}

impl TranscriptRow {
    fn into_course(self) -> Result<Course, InvalidArgument> {
        let grade_type = self
            .grade_type
            .as_deref()
            .map(str::parse::<GradeType>)
            .transpose()?
            .unwrap_or(GradeType::Letter);
        let course_type = self
            .course_type
            .as_deref()
            .map(str::parse::<CourseType>)
            .transpose()?
            .unwrap_or_default();
        let grade_level = self
            .grade_level
            .as_deref()
            .map(str::parse::<GradeLevel>)
            .transpose()?;

        Ok(Course {
            id: None,
            name: self.name,
            grade: self.grade,
            grade_type,
            course_type,
            grade_level,
            academic_year: self.academic_year,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_with_optional_cells() {
        let csv = "Course,Grade,Grade Type,Course Type,Grade Level,Academic Year\n\
AP Biology,A-,Letter,AP/IB,11,2024-2025\n\
Chemistry,91,100-point,Honors,10th,2023-2024\n\
Ceramics,Pass/Fail,,,,\n";

        let courses = parse_courses(csv.as_bytes()).expect("transcript parses");
        assert_eq!(courses.len(), 3);
        assert_eq!(courses[0].course_type, CourseType::ApIb);
        assert_eq!(courses[0].grade_level, Some(GradeLevel::Eleventh));
        assert_eq!(courses[1].grade_type, GradeType::HundredPoint);
        assert_eq!(courses[1].academic_year.as_deref(), Some("2023-2024"));
        assert_eq!(courses[2].grade_type, GradeType::Letter);
        assert_eq!(courses[2].course_type, CourseType::Regular);
        assert!(courses[2].grade_level.is_none());
        assert!(courses[2].academic_year.is_none());
        assert!(courses[2].is_special());
    }

    #[test]
    fn unknown_course_type_names_the_row() {
        let csv = "Course,Grade,Grade Type,Course Type,Grade Level,Academic Year\n\
English,B,Letter,Regular,9,2022-2023\n\
Physics,B,Letter,Accelerated,9,2022-2023\n";

        let err = parse_courses(csv.as_bytes()).expect_err("unknown course type rejected");
        match err {
            ImportError::Field { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(source.field, "course type");
                assert_eq!(source.value, "Accelerated");
            }
            other => panic!("expected field error, got {other:?}"),
        }
    }
}
