//! Career-fit assessment: question catalog, response collection, and scoring.
//!
//! The scoring engine is a pure function of the response list and the bank.
//! The session type collects answers in-process and hands them to the engine
//! once; the router exposes the same engine over HTTP without keeping state.

pub mod bank;
pub mod domain;
pub mod router;
pub mod scoring;
pub mod session;

#[cfg(test)]
mod tests;

pub use bank::{QuestionBank, QuestionBankDocument, QuestionBankError, SectionInfo};
pub use domain::{
    Answer, AssessmentResponse, AssessmentResults, Category, Question, QuestionId, QuestionKind,
    Recommendation, ScoringStrategy, Subcategory, WiscarDimension, WiscarScores,
};
pub use router::assessment_router;
pub use scoring::{ScoringEngine, ScoringRubric};
pub use session::{AssessmentSession, SectionProgress, SessionError};
