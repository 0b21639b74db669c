use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Answer shape presented to the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    Likert,
    Scenario,
    Numerical,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple-choice",
            QuestionKind::Likert => "likert",
            QuestionKind::Scenario => "scenario",
            QuestionKind::Numerical => "numerical",
        }
    }

    /// How answers to this kind of question turn into WISCAR points.
    pub const fn strategy(self) -> ScoringStrategy {
        match self {
            QuestionKind::MultipleChoice | QuestionKind::Scenario => ScoringStrategy::Objective,
            QuestionKind::Likert => ScoringStrategy::Scale,
            QuestionKind::Numerical => ScoringStrategy::Unscored,
        }
    }

    pub const fn uses_likert_labels(self) -> bool {
        matches!(self, QuestionKind::Likert)
    }
}

/// Scoring rule for a question, independent of how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringStrategy {
    /// Full credit for the keyed option, floor credit otherwise.
    Objective,
    /// The raw 1..=5 scale value is the score.
    Scale,
    /// Collected but worth nothing.
    Unscored,
}

/// Top-level section a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Psychometric,
    Technical,
    Wiscar,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Psychometric, Category::Technical, Category::Wiscar];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Psychometric => "psychometric",
            Category::Technical => "technical",
            Category::Wiscar => "wiscar",
        }
    }
}

/// Finer grouping key within a category.
///
/// Labels outside the known set are kept as [`Subcategory::Other`] so a bank
/// round-trips, but no scoring table ever matches them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Subcategory {
    Interest,
    Personality,
    Motivation,
    LogicalReasoning,
    Numerical,
    DomainKnowledge,
    Will,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
    Other(String),
}

impl Subcategory {
    pub fn label(&self) -> &str {
        match self {
            Subcategory::Interest => "interest",
            Subcategory::Personality => "personality",
            Subcategory::Motivation => "motivation",
            Subcategory::LogicalReasoning => "logical-reasoning",
            Subcategory::Numerical => "numerical",
            Subcategory::DomainKnowledge => "domain-knowledge",
            Subcategory::Will => "will",
            Subcategory::Skill => "skill",
            Subcategory::Cognitive => "cognitive",
            Subcategory::Ability => "ability",
            Subcategory::RealWorld => "real-world",
            Subcategory::Other(label) => label.as_str(),
        }
    }
}

impl From<String> for Subcategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "interest" => Subcategory::Interest,
            "personality" => Subcategory::Personality,
            "motivation" => Subcategory::Motivation,
            "logical-reasoning" => Subcategory::LogicalReasoning,
            "numerical" => Subcategory::Numerical,
            "domain-knowledge" => Subcategory::DomainKnowledge,
            "will" => Subcategory::Will,
            "skill" => Subcategory::Skill,
            "cognitive" => Subcategory::Cognitive,
            "ability" => Subcategory::Ability,
            "real-world" => Subcategory::RealWorld,
            _ => Subcategory::Other(value),
        }
    }
}

impl From<Subcategory> for String {
    fn from(value: Subcategory) -> Self {
        match value {
            Subcategory::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalog entry describing a single question and, for objective items, its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub category: Category,
    pub subcategory: Subcategory,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likert_labels: Option<Vec<String>>,
}

impl Question {
    pub fn strategy(&self) -> ScoringStrategy {
        self.kind.strategy()
    }

    /// True when the answer is numeric and equals the keyed option index.
    pub fn is_correct(&self, answer: &Answer) -> bool {
        match (self.correct_answer, answer.as_number()) {
            (Some(key), Some(value)) => value == key as f64,
            _ => false,
        }
    }
}

/// Raw answer value. Choice questions send an option index, Likert questions
/// send the scale value; free text is accepted but never scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Number(f64),
    Text(String),
}

impl Answer {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Answer::Number(value) => Some(*value),
            Answer::Text(_) => None,
        }
    }
}

impl From<u8> for Answer {
    fn from(value: u8) -> Self {
        Answer::Number(f64::from(value))
    }
}

impl From<usize> for Answer {
    fn from(value: usize) -> Self {
        Answer::Number(value as f64)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

/// One submitted answer. `time_spent` is in milliseconds and never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub question_id: QuestionId,
    pub answer: Answer,
    #[serde(default)]
    pub time_spent: u64,
}

impl AssessmentResponse {
    pub fn new(question_id: impl Into<String>, answer: impl Into<Answer>) -> Self {
        Self {
            question_id: QuestionId::new(question_id),
            answer: answer.into(),
            time_spent: 0,
        }
    }
}

/// Three-way fit verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Yes => "yes",
            Recommendation::Maybe => "maybe",
            Recommendation::No => "no",
        }
    }
}

/// The six WISCAR dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    pub const ALL: [WiscarDimension; 6] = [
        WiscarDimension::Will,
        WiscarDimension::Interest,
        WiscarDimension::Skill,
        WiscarDimension::Cognitive,
        WiscarDimension::Ability,
        WiscarDimension::RealWorld,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            WiscarDimension::Will => "will",
            WiscarDimension::Interest => "interest",
            WiscarDimension::Skill => "skill",
            WiscarDimension::Cognitive => "cognitive",
            WiscarDimension::Ability => "ability",
            WiscarDimension::RealWorld => "realWorld",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
}

impl WiscarScores {
    pub fn get(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::RealWorld => self.real_world,
        }
    }

    pub(crate) fn set(&mut self, dimension: WiscarDimension, score: u8) {
        match dimension {
            WiscarDimension::Will => self.will = score,
            WiscarDimension::Interest => self.interest = score,
            WiscarDimension::Skill => self.skill = score,
            WiscarDimension::Cognitive => self.cognitive = score,
            WiscarDimension::Ability => self.ability = score,
            WiscarDimension::RealWorld => self.real_world = score,
        }
    }

    /// Unweighted mean across all six dimensions.
    pub fn mean(&self) -> f64 {
        let total: u32 = WiscarDimension::ALL
            .iter()
            .map(|dimension| u32::from(self.get(*dimension)))
            .sum();
        f64::from(total) / WiscarDimension::ALL.len() as f64
    }
}

/// Authoritative output of one scoring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResults {
    pub psychometric_score: u8,
    pub technical_score: u8,
    pub wiscar_scores: WiscarScores,
    pub overall_score: u8,
    pub recommendation: Recommendation,
    pub feedback: String,
    pub next_steps: Vec<String>,
    pub career_paths: Vec<String>,
}
