use std::collections::{HashMap, HashSet};
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::domain::{Category, Question, QuestionId, QuestionKind, Subcategory};

pub const STANDARD_BANK_VERSION: &str = "ppc-sem-2024.1";

const AGREEMENT_SCALE: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// Validation errors raised while loading a question bank.
#[derive(Debug, thiserror::Error)]
pub enum QuestionBankError {
    #[error("question bank contains no questions")]
    Empty,
    #[error("question id {0} appears more than once")]
    DuplicateId(QuestionId),
    #[error("question {id} of type {kind} must define {expected}")]
    MissingChoices {
        id: QuestionId,
        kind: &'static str,
        expected: &'static str,
    },
    #[error("question {id} of type {kind} must not define {unexpected}")]
    UnexpectedChoices {
        id: QuestionId,
        kind: &'static str,
        unexpected: &'static str,
    },
    #[error("question {id} keys option {index} but only has {available} option(s)")]
    CorrectAnswerOutOfRange {
        id: QuestionId,
        index: usize,
        available: usize,
    },
    #[error("unable to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unable to read question bank: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialized form of a bank, also used by the questions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBankDocument {
    pub version: String,
    pub questions: Vec<Question>,
}

/// Display metadata for one of the three assessment sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub category: Category,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub questions: usize,
}

/// Immutable, ordered question catalog with id lookup.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    version: String,
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        let questions = standard_questions();
        let index = questions
            .iter()
            .enumerate()
            .map(|(position, question)| (question.id.clone(), position))
            .collect();

        Self {
            version: STANDARD_BANK_VERSION.to_string(),
            questions,
            index,
        }
    }

    /// Build a bank from already-parsed questions, enforcing the catalog invariants.
    pub fn new(
        version: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.clone()) {
                return Err(QuestionBankError::DuplicateId(question.id.clone()));
            }
            validate_question(question)?;
        }

        let index = questions
            .iter()
            .enumerate()
            .map(|(position, question)| (question.id.clone(), position))
            .collect();

        Ok(Self {
            version: version.into(),
            questions,
            index,
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, QuestionBankError> {
        let document: QuestionBankDocument = serde_json::from_reader(reader)?;
        Self::new(document.version, document.questions)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn lookup(&self, id: &QuestionId) -> Option<&Question> {
        self.index
            .get(id)
            .and_then(|position| self.questions.get(*position))
    }

    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions_in(&self, category: Category) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.category == category)
    }

    pub fn sections(&self) -> Vec<SectionInfo> {
        Category::ALL
            .iter()
            .map(|category| {
                let (title, description, duration) = section_copy(*category);
                SectionInfo {
                    category: *category,
                    title: title.to_string(),
                    description: description.to_string(),
                    duration: duration.to_string(),
                    questions: self.questions_in(*category).count(),
                }
            })
            .collect()
    }

    pub fn document(&self) -> QuestionBankDocument {
        QuestionBankDocument {
            version: self.version.clone(),
            questions: self.questions.clone(),
        }
    }
}

fn validate_question(question: &Question) -> Result<(), QuestionBankError> {
    let kind = question.kind.label();

    if question.kind.uses_likert_labels() {
        if question.likert_labels.as_ref().map_or(true, Vec::is_empty) {
            return Err(QuestionBankError::MissingChoices {
                id: question.id.clone(),
                kind,
                expected: "likertLabels",
            });
        }
        if question.options.is_some() {
            return Err(QuestionBankError::UnexpectedChoices {
                id: question.id.clone(),
                kind,
                unexpected: "options",
            });
        }
    } else {
        if question.options.as_ref().map_or(true, Vec::is_empty) {
            return Err(QuestionBankError::MissingChoices {
                id: question.id.clone(),
                kind,
                expected: "options",
            });
        }
        if question.likert_labels.is_some() {
            return Err(QuestionBankError::UnexpectedChoices {
                id: question.id.clone(),
                kind,
                unexpected: "likertLabels",
            });
        }
    }

    if let Some(index) = question.correct_answer {
        let available = question.options.as_ref().map_or(0, Vec::len);
        if index >= available {
            return Err(QuestionBankError::CorrectAnswerOutOfRange {
                id: question.id.clone(),
                index,
                available,
            });
        }
    }

    Ok(())
}

fn section_copy(category: Category) -> (&'static str, &'static str, &'static str) {
    match category {
        Category::Psychometric => (
            "Psychometric Assessment",
            "Evaluating your personality fit, interests, and motivation for PPC/SEM roles",
            "8-10 minutes",
        ),
        Category::Technical => (
            "Technical & Aptitude",
            "Testing your logical reasoning, numerical skills, and basic PPC knowledge",
            "10-12 minutes",
        ),
        Category::Wiscar => (
            "WISCAR Framework",
            "Comprehensive evaluation across Will, Interest, Skill, Cognitive ability, Ability to learn, and Real-world alignment",
            "8-10 minutes",
        ),
    }
}

fn likert(id: &str, category: Category, subcategory: Subcategory, prompt: &str) -> Question {
    Question {
        id: QuestionId::new(id),
        kind: QuestionKind::Likert,
        category,
        subcategory,
        question: prompt.to_string(),
        scenario: None,
        options: None,
        correct_answer: None,
        likert_labels: Some(AGREEMENT_SCALE.iter().map(|label| label.to_string()).collect()),
    }
}

fn choice(
    id: &str,
    kind: QuestionKind,
    category: Category,
    subcategory: Subcategory,
    prompt: &str,
    options: [&str; 4],
    correct_answer: usize,
) -> Question {
    Question {
        id: QuestionId::new(id),
        kind,
        category,
        subcategory,
        question: prompt.to_string(),
        scenario: None,
        options: Some(options.iter().map(|option| option.to_string()).collect()),
        correct_answer: Some(correct_answer),
        likert_labels: None,
    }
}

fn scenario(
    id: &str,
    subcategory: Subcategory,
    prompt: &str,
    narrative: &str,
    options: [&str; 4],
    correct_answer: usize,
) -> Question {
    Question {
        scenario: Some(narrative.to_string()),
        ..choice(
            id,
            QuestionKind::Scenario,
            Category::Wiscar,
            subcategory,
            prompt,
            options,
            correct_answer,
        )
    }
}

fn standard_questions() -> Vec<Question> {
    use Category::{Psychometric, Technical, Wiscar};
    use QuestionKind::MultipleChoice;

    vec![
        likert(
            "psych_1",
            Psychometric,
            Subcategory::Interest,
            "I enjoy analyzing data to find patterns and insights that can improve business outcomes.",
        ),
        likert(
            "psych_2",
            Psychometric,
            Subcategory::Interest,
            "I find digital advertising campaigns and their optimization fascinating.",
        ),
        likert(
            "psych_3",
            Psychometric,
            Subcategory::Interest,
            "I prefer working with numbers and metrics rather than creative design work.",
        ),
        likert(
            "psych_4",
            Psychometric,
            Subcategory::Personality,
            "I am very organized and pay attention to small details.",
        ),
        likert(
            "psych_5",
            Psychometric,
            Subcategory::Personality,
            "I persist with tasks even when they become challenging or repetitive.",
        ),
        likert(
            "psych_6",
            Psychometric,
            Subcategory::Motivation,
            "I am motivated by seeing measurable results from my work.",
        ),
        choice(
            "tech_1",
            MultipleChoice,
            Technical,
            Subcategory::LogicalReasoning,
            "You notice your PPC campaign has a high click-through rate but low conversions. What should be your first priority?",
            [
                "Increase the budget to get more clicks",
                "Review and optimize the landing page experience",
                "Change the ad copy completely",
                "Pause the campaign immediately",
            ],
            1,
        ),
        choice(
            "tech_2",
            MultipleChoice,
            Technical,
            Subcategory::LogicalReasoning,
            "If Campaign A has a 2% CTR with 1000 impressions and Campaign B has a 1.5% CTR with 2000 impressions, which generated more clicks?",
            [
                "Campaign A (20 clicks)",
                "Campaign B (30 clicks)",
                "Both generated the same",
                "Cannot determine without more data",
            ],
            1,
        ),
        choice(
            "tech_3",
            MultipleChoice,
            Technical,
            Subcategory::Numerical,
            "If your cost per click is $2.50 and you have 40 clicks, with 4 conversions, what is your cost per acquisition?",
            ["$10.00", "$25.00", "$40.00", "$100.00"],
            1,
        ),
        choice(
            "tech_4",
            MultipleChoice,
            Technical,
            Subcategory::Numerical,
            "You have a $1000 daily budget. If 60% goes to Search campaigns and 40% to Display, how much is allocated to Display campaigns?",
            ["$600", "$400", "$300", "$700"],
            1,
        ),
        choice(
            "tech_5",
            MultipleChoice,
            Technical,
            Subcategory::DomainKnowledge,
            "What does \"Quality Score\" primarily measure in Google Ads?",
            [
                "How much you are willing to pay per click",
                "The relevance and quality of your ads, keywords, and landing pages",
                "The number of conversions your ad generates",
                "The total budget allocated to your campaign",
            ],
            1,
        ),
        choice(
            "tech_6",
            MultipleChoice,
            Technical,
            Subcategory::DomainKnowledge,
            "Which keyword match type provides the most control over which searches trigger your ads?",
            [
                "Broad match",
                "Phrase match",
                "Exact match",
                "Broad match modifier",
            ],
            2,
        ),
        scenario(
            "wiscar_1",
            Subcategory::Will,
            "How would you handle a situation where your PPC campaigns are underperforming for several weeks?",
            "You've been managing PPC campaigns for a client, but for the past 3 weeks, the campaigns have consistently underperformed. The client is getting concerned and you need to turn things around.",
            [
                "Immediately pause all campaigns and start over",
                "Conduct systematic A/B tests and analyze data to identify issues",
                "Increase budgets hoping for better performance",
                "Blame external factors and wait for improvements",
            ],
            1,
        ),
        likert(
            "wiscar_2",
            Wiscar,
            Subcategory::Interest,
            "I would be excited to learn about new PPC platforms and advertising features as they are released.",
        ),
        scenario(
            "wiscar_3",
            Subcategory::Skill,
            "A client wants to expand their campaigns to new geographic markets. What is your approach?",
            "Your client, currently successful in the US market, wants to expand their PPC campaigns to target customers in Canada and the UK.",
            [
                "Copy existing campaigns and change the location targeting",
                "Research market differences, local competition, and adjust strategies accordingly",
                "Start with small budgets and see what happens",
                "Advise against expansion due to complexity",
            ],
            1,
        ),
        choice(
            "wiscar_4",
            MultipleChoice,
            Wiscar,
            Subcategory::Cognitive,
            "When optimizing campaigns, what is the most logical sequence of actions?",
            [
                "Increase budgets → Change ad copy → Adjust bids → Analyze results",
                "Analyze current performance → Identify issues → Test solutions → Measure results",
                "Change everything at once → Monitor for improvements",
                "Focus only on the highest spending campaigns",
            ],
            1,
        ),
        likert(
            "wiscar_5",
            Wiscar,
            Subcategory::Ability,
            "I actively seek feedback on my work and use it to improve my performance.",
        ),
        scenario(
            "wiscar_6",
            Subcategory::RealWorld,
            "How would you communicate campaign performance to a non-technical client?",
            "You need to present monthly PPC results to a business owner who has limited technical knowledge about digital marketing.",
            [
                "Show all the technical metrics and data tables",
                "Focus on business outcomes like leads, sales, and ROI with clear visualizations",
                "Only report on impressions and clicks",
                "Send a brief email with basic numbers",
            ],
            1,
        ),
    ]
}
