use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use super::super::bank::QuestionBank;
use super::super::domain::{
    AssessmentResponse, Category, Question, ScoringStrategy, WiscarDimension, WiscarScores,
};
use super::config::{wiscar_dimension_for, ScoringRubric};

/// A response paired with the catalog question it answers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scored<'a> {
    pub question: &'a Question,
    pub response: &'a AssessmentResponse,
}

#[derive(Debug, Default)]
pub(crate) struct Partition<'a> {
    pub psychometric: Vec<Scored<'a>>,
    pub technical: Vec<Scored<'a>>,
    pub wiscar: Vec<Scored<'a>>,
}

impl<'a> Partition<'a> {
    fn bucket_mut(&mut self, category: Category) -> &mut Vec<Scored<'a>> {
        match category {
            Category::Psychometric => &mut self.psychometric,
            Category::Technical => &mut self.technical,
            Category::Wiscar => &mut self.wiscar,
        }
    }

    fn iter(&self) -> impl Iterator<Item = &Scored<'a>> {
        self.psychometric
            .iter()
            .chain(self.technical.iter())
            .chain(self.wiscar.iter())
    }
}

/// Numeric outputs of a scoring run, before recommendation and advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CategoryScores {
    pub psychometric: u8,
    pub technical: u8,
    pub wiscar: WiscarScores,
    pub overall: u8,
}

pub(crate) fn score_responses(
    bank: &QuestionBank,
    responses: &[AssessmentResponse],
    rubric: &ScoringRubric,
) -> CategoryScores {
    let latest = latest_responses(responses);
    let partition = partition(bank, &latest);

    let psychometric = psychometric_score(&partition.psychometric, rubric);
    let technical = technical_score(&partition.technical);
    let wiscar = wiscar_scores(&partition, rubric);
    let overall = percentage(
        f64::from(psychometric) * rubric.psychometric_weight
            + f64::from(technical) * rubric.technical_weight
            + wiscar.mean() * rubric.wiscar_weight,
    );

    CategoryScores {
        psychometric,
        technical,
        wiscar,
        overall,
    }
}

/// Keep only the last response per question id, preserving the order of survivors.
pub(crate) fn latest_responses(responses: &[AssessmentResponse]) -> Vec<&AssessmentResponse> {
    let mut seen = HashSet::new();
    let mut latest: Vec<&AssessmentResponse> = responses
        .iter()
        .rev()
        .filter(|response| seen.insert(response.question_id.clone()))
        .collect();
    latest.reverse();

    let superseded = responses.len() - latest.len();
    if superseded > 0 {
        debug!(superseded, "ignoring superseded responses");
    }

    latest
}

pub(crate) fn partition<'a>(
    bank: &'a QuestionBank,
    responses: &[&'a AssessmentResponse],
) -> Partition<'a> {
    let mut partition = Partition::default();

    for response in responses.iter().copied() {
        match bank.lookup(&response.question_id) {
            Some(question) => partition.bucket_mut(question.category).push(Scored {
                question,
                response,
            }),
            None => {
                debug!(question_id = %response.question_id, "dropping response for unknown question");
            }
        }
    }

    partition
}

pub(crate) fn psychometric_score(bucket: &[Scored<'_>], rubric: &ScoringRubric) -> u8 {
    if bucket.is_empty() {
        return 0;
    }

    let sum: f64 = bucket
        .iter()
        .map(|scored| scored.response.answer.as_number().unwrap_or(0.0))
        .sum();

    percentage(sum / (bucket.len() as f64 * rubric.scale_max) * 100.0)
}

pub(crate) fn technical_score(bucket: &[Scored<'_>]) -> u8 {
    if bucket.is_empty() {
        return 0;
    }

    let correct = bucket
        .iter()
        .filter(|scored| scored.question.is_correct(&scored.response.answer))
        .count();

    percentage(correct as f64 / bucket.len() as f64 * 100.0)
}

pub(crate) fn wiscar_points(scored: &Scored<'_>, rubric: &ScoringRubric) -> f64 {
    match scored.question.strategy() {
        ScoringStrategy::Objective => {
            if scored.question.is_correct(&scored.response.answer) {
                rubric.objective_full_credit
            } else {
                rubric.objective_floor_credit
            }
        }
        ScoringStrategy::Scale => scored.response.answer.as_number().unwrap_or(0.0),
        ScoringStrategy::Unscored => 0.0,
    }
}

pub(crate) fn wiscar_scores(partition: &Partition<'_>, rubric: &ScoringRubric) -> WiscarScores {
    let mut pools: BTreeMap<WiscarDimension, Vec<f64>> = BTreeMap::new();

    for scored in partition.iter() {
        if let Some(dimension) =
            wiscar_dimension_for(scored.question.category, &scored.question.subcategory)
        {
            pools
                .entry(dimension)
                .or_default()
                .push(wiscar_points(scored, rubric));
        }
    }

    let mut scores = WiscarScores::default();
    for dimension in WiscarDimension::ALL {
        let score = pools
            .get(&dimension)
            .map(|points| average_percentage(points, rubric.scale_max))
            .unwrap_or(0);
        scores.set(dimension, score);
    }
    scores
}

fn average_percentage(points: &[f64], scale_max: f64) -> u8 {
    if points.is_empty() {
        return 0;
    }
    let average = points.iter().sum::<f64>() / points.len() as f64;
    percentage(average / scale_max * 100.0)
}

/// Round half up and clamp into 0..=100.
pub(crate) fn percentage(value: f64) -> u8 {
    let rounded = (value + 0.5).floor();
    if rounded.is_nan() {
        return 0;
    }
    rounded.clamp(0.0, 100.0) as u8
}
