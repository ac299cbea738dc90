mod catalog;
pub mod domain;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use catalog::{AdmissionCriteriaCatalog, Levels};
pub use domain::{
    CoreScores, Criterion, CriterionScore, Evaluation, TraditionalScores, UniversityType,
};
pub use policy::UniversityPolicy;

use serde::{Deserialize, Serialize};

/// Sums of the counted criterion ratings. Lower is stronger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub core_total: u32,
    pub traditional_total: u32,
    pub total_score: u32,
}

impl ScoreBreakdown {
    pub(crate) fn new(core_total: u32, traditional_total: u32) -> Self {
        Self {
            core_total,
            traditional_total,
            total_score: core_total + traditional_total,
        }
    }
}

/// Core, traditional, and total score for an evaluation under its university type's policy.
pub fn score(evaluation: &Evaluation) -> ScoreBreakdown {
    rules::breakdown(evaluation, &evaluation.university_type.policy())
}

/// Largest total the evaluation's university type allows, core points included.
pub fn max_possible(evaluation: &Evaluation) -> u32 {
    evaluation.university_type.policy().max_possible()
}

/// Largest traditional-only total, the figure shown beside the traditional subtotal.
pub fn traditional_max(evaluation: &Evaluation) -> u32 {
    evaluation.university_type.policy().traditional_max()
}

/// Stateless scorer pairing the totals with the narrative catalog.
pub struct AdmissionScoringEngine {
    catalog: &'static AdmissionCriteriaCatalog,
}

impl Default for AdmissionScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AdmissionScoringEngine {
    pub fn new() -> Self {
        Self {
            catalog: AdmissionCriteriaCatalog::standard(),
        }
    }

    pub fn score(&self, evaluation: &Evaluation) -> ScoreBreakdown {
        score(evaluation)
    }

    pub fn max_possible(&self, evaluation: &Evaluation) -> u32 {
        max_possible(evaluation)
    }

    pub fn evaluate(&self, evaluation: &Evaluation) -> EvaluationOutcome {
        let policy = evaluation.university_type.policy();
        let breakdown = rules::breakdown(evaluation, &policy);
        let components = rules::score_components(evaluation, &policy, self.catalog);
        let remarks = rules::remarks(evaluation, &policy);

        EvaluationOutcome {
            student_id: evaluation.student_id.clone(),
            university_type: evaluation.university_type,
            breakdown,
            core_max: policy.core_max(),
            traditional_max: policy.traditional_max(),
            max_possible: policy.max_possible(),
            components,
            remarks,
        }
    }
}

/// One criterion's contribution, kept for transparent report lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub criterion: Criterion,
    pub label: String,
    pub score: u8,
    pub counted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Totals, maxima, and per-criterion lines for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    pub university_type: UniversityType,
    pub breakdown: ScoreBreakdown,
    pub core_max: u32,
    pub traditional_max: u32,
    pub max_possible: u32,
    pub components: Vec<ScoreComponent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remarks: Vec<String>,
}

impl EvaluationOutcome {
    /// `"{total}/{max}"`, the form reports print.
    pub fn total_label(&self) -> String {
        format!("{}/{}", self.breakdown.total_score, self.max_possible)
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: core {}/{}, traditional {}/{}, total {}",
            self.university_type.label(),
            self.breakdown.core_total,
            self.core_max,
            self.breakdown.traditional_total,
            self.traditional_max,
            self.total_label()
        )
    }
}
