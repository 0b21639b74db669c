use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::bank::QuestionBank;
use crate::assessment::domain::{
    Answer, AssessmentResponse, Category, Question, QuestionId, QuestionKind, Subcategory,
};
use crate::assessment::scoring::ScoringEngine;

pub(super) fn standard_engine() -> ScoringEngine {
    ScoringEngine::standard()
}

pub(super) fn standard_bank() -> Arc<QuestionBank> {
    Arc::new(QuestionBank::standard())
}

pub(super) fn respond(question_id: &str, answer: impl Into<Answer>) -> AssessmentResponse {
    AssessmentResponse::new(question_id, answer)
}

pub(super) fn session_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Strongly aligned respondent: top of every scale, every key correct.
pub(super) fn strong_responses() -> Vec<AssessmentResponse> {
    let mut responses: Vec<AssessmentResponse> = (1..=6)
        .map(|n| respond(&format!("psych_{n}"), 5u8))
        .collect();
    responses.extend([
        respond("tech_1", 1usize),
        respond("tech_2", 1usize),
        respond("tech_3", 1usize),
        respond("tech_4", 1usize),
        respond("tech_5", 1usize),
        respond("tech_6", 2usize),
        respond("wiscar_1", 1usize),
        respond("wiscar_2", 5u8),
        respond("wiscar_3", 1usize),
        respond("wiscar_4", 1usize),
        respond("wiscar_5", 5u8),
        respond("wiscar_6", 1usize),
    ]);
    responses
}

/// Mixed respondent: solid interest, half the technical keys.
pub(super) fn developing_responses() -> Vec<AssessmentResponse> {
    vec![
        respond("psych_1", 4u8),
        respond("psych_2", 4u8),
        respond("psych_3", 3u8),
        respond("psych_4", 4u8),
        respond("psych_5", 3u8),
        respond("psych_6", 4u8),
        respond("tech_1", 1usize),
        respond("tech_2", 0usize),
        respond("tech_3", 1usize),
        respond("tech_4", 1usize),
        respond("tech_5", 0usize),
        respond("tech_6", 0usize),
        respond("wiscar_1", 1usize),
        respond("wiscar_2", 4u8),
        respond("wiscar_3", 0usize),
        respond("wiscar_4", 1usize),
        respond("wiscar_5", 3u8),
        respond("wiscar_6", 1usize),
    ]
}

/// Poorly aligned respondent: bottom of every scale, no key correct.
pub(super) fn exploring_responses() -> Vec<AssessmentResponse> {
    let mut responses: Vec<AssessmentResponse> = (1..=6)
        .map(|n| respond(&format!("psych_{n}"), 1u8))
        .collect();
    responses.extend((1..=6).map(|n| respond(&format!("tech_{n}"), 0usize)));
    responses.extend([
        respond("wiscar_1", 0usize),
        respond("wiscar_2", 1u8),
        respond("wiscar_3", 0usize),
        respond("wiscar_4", 0usize),
        respond("wiscar_5", 1u8),
        respond("wiscar_6", 0usize),
    ]);
    responses
}

pub(super) fn objective_question(
    id: &str,
    kind: QuestionKind,
    category: Category,
    subcategory: Subcategory,
    correct_answer: Option<usize>,
) -> Question {
    Question {
        id: QuestionId::new(id),
        kind,
        category,
        subcategory,
        question: format!("Prompt for {id}"),
        scenario: None,
        options: Some(vec![
            "First".to_string(),
            "Second".to_string(),
            "Third".to_string(),
        ]),
        correct_answer,
        likert_labels: None,
    }
}

pub(super) fn likert_question(id: &str, category: Category, subcategory: Subcategory) -> Question {
    Question {
        id: QuestionId::new(id),
        kind: QuestionKind::Likert,
        category,
        subcategory,
        question: format!("Prompt for {id}"),
        scenario: None,
        options: None,
        correct_answer: None,
        likert_labels: Some(
            ["1", "2", "3", "4", "5"]
                .iter()
                .map(|label| label.to_string())
                .collect(),
        ),
    }
}

pub(super) fn engine_with(questions: Vec<Question>) -> ScoringEngine {
    let bank = QuestionBank::new("test-bank", questions).expect("test bank is valid");
    ScoringEngine::new(Arc::new(bank))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
