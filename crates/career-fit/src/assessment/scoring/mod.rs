mod advice;
mod config;
mod policy;
mod rules;

pub use config::{
    wiscar_dimension_for, RecommendationThresholds, ScoringRubric, STANDARD_RUBRIC, WISCAR_ROUTES,
};

use std::sync::Arc;

use super::bank::QuestionBank;
use super::domain::{AssessmentResponse, AssessmentResults, Recommendation};
use advice::personalized_advice;
use policy::decide_recommendation;

/// Stateless engine turning a completed response list into results.
///
/// Scoring is total: unknown question ids are dropped, empty buckets score 0
/// and non-numeric answers contribute nothing, so `compute` never fails.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    bank: Arc<QuestionBank>,
    rubric: ScoringRubric,
}

impl ScoringEngine {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            rubric: STANDARD_RUBRIC,
        }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(QuestionBank::standard()))
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn rubric(&self) -> &ScoringRubric {
        &self.rubric
    }

    pub fn compute(&self, responses: &[AssessmentResponse]) -> AssessmentResults {
        let scores = rules::score_responses(&self.bank, responses, &self.rubric);

        let recommendation = decide_recommendation(
            scores.overall,
            scores.psychometric,
            scores.technical,
            &self.rubric.thresholds,
        );
        let advice = personalized_advice(recommendation, scores.psychometric, scores.technical);

        AssessmentResults {
            psychometric_score: scores.psychometric,
            technical_score: scores.technical,
            wiscar_scores: scores.wiscar,
            overall_score: scores.overall,
            recommendation,
            feedback: advice.feedback,
            next_steps: advice.next_steps,
            career_paths: advice.career_paths,
        }
    }

    /// Recommendation for an already-computed set of headline scores.
    pub fn recommend(&self, overall: u8, psychometric: u8, technical: u8) -> Recommendation {
        decide_recommendation(overall, psychometric, technical, &self.rubric.thresholds)
    }
}
