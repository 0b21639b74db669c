use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::bank::QuestionBank;
use super::domain::{Answer, AssessmentResponse, AssessmentResults, Category, QuestionId};
use super::scoring::ScoringEngine;

/// Errors raised by the response collector.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("question {0} is not part of the question bank")]
    UnknownQuestion(QuestionId),
    #[error("assessment incomplete: {} question(s) unanswered", .missing.len())]
    Incomplete { missing: Vec<QuestionId> },
    #[error("assessment already finished")]
    AlreadyFinished,
}

/// Answered/total counts for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionProgress {
    pub category: Category,
    pub title: String,
    pub answered: usize,
    pub total: usize,
}

/// In-process collector holding at most one live response per question.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    bank: Arc<QuestionBank>,
    responses: Vec<AssessmentResponse>,
    started_at: DateTime<Utc>,
    last_event_at: DateTime<Utc>,
    finished: bool,
}

impl AssessmentSession {
    pub fn new(bank: Arc<QuestionBank>, started_at: DateTime<Utc>) -> Self {
        Self {
            bank,
            responses: Vec::new(),
            started_at,
            last_event_at: started_at,
            finished: false,
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Record an answer. A later answer for the same question replaces the
    /// earlier one and moves to the end of the list.
    pub fn record(
        &mut self,
        question_id: QuestionId,
        answer: Answer,
        at: DateTime<Utc>,
    ) -> Result<&AssessmentResponse, SessionError> {
        if self.finished {
            return Err(SessionError::AlreadyFinished);
        }
        if self.bank.lookup(&question_id).is_none() {
            return Err(SessionError::UnknownQuestion(question_id));
        }

        let time_spent = (at - self.last_event_at).num_milliseconds().max(0) as u64;
        self.last_event_at = at;

        self.responses
            .retain(|response| response.question_id != question_id);
        self.responses.push(AssessmentResponse {
            question_id,
            answer,
            time_spent,
        });

        let position = self.responses.len() - 1;
        Ok(&self.responses[position])
    }

    pub fn response(&self, question_id: &QuestionId) -> Option<&AssessmentResponse> {
        self.responses
            .iter()
            .find(|response| &response.question_id == question_id)
    }

    pub fn responses(&self) -> &[AssessmentResponse] {
        &self.responses
    }

    pub fn answered(&self) -> usize {
        self.responses.len()
    }

    pub fn total(&self) -> usize {
        self.bank.len()
    }

    pub fn progress(&self) -> Vec<SectionProgress> {
        self.bank
            .sections()
            .into_iter()
            .map(|section| {
                let answered = self
                    .bank
                    .questions_in(section.category)
                    .filter(|question| self.response(&question.id).is_some())
                    .count();
                SectionProgress {
                    category: section.category,
                    title: section.title,
                    answered,
                    total: section.questions,
                }
            })
            .collect()
    }

    /// Unanswered question ids in catalog order.
    pub fn missing(&self) -> Vec<QuestionId> {
        self.bank
            .all()
            .iter()
            .filter(|question| self.response(&question.id).is_none())
            .map(|question| question.id.clone())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Score the session once every question has an answer.
    pub fn finish(&mut self, engine: &ScoringEngine) -> Result<AssessmentResults, SessionError> {
        if self.finished {
            return Err(SessionError::AlreadyFinished);
        }

        let missing = self.missing();
        if !missing.is_empty() {
            return Err(SessionError::Incomplete { missing });
        }

        let results = engine.compute(&self.responses);
        self.finished = true;

        info!(
            answered = self.responses.len(),
            overall = results.overall_score,
            recommendation = results.recommendation.label(),
            "assessment session finished"
        );

        Ok(results)
    }
}
