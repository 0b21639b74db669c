use crate::infra::cli_engine;
use career_fit::assessment::{
    Answer, AssessmentResponse, AssessmentResults, AssessmentSession, Question, QuestionKind,
    ScoringEngine, WiscarDimension,
};
use career_fit::error::AppError;
use chrono::{Duration, Utc};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Emit the bank as JSON instead of a readable listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding an array of `{questionId, answer, timeSpent}` responses
    pub(crate) responses: PathBuf,
    /// Emit the results as JSON instead of a readable report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Synthetic candidate whose answers drive the walkthrough
    #[arg(long, value_enum, default_value_t = DemoProfile::Developing)]
    pub(crate) profile: DemoProfile,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoProfile {
    /// Agrees strongly and answers every keyed question correctly
    Strong,
    /// Leans positive and gets every other keyed question right
    #[default]
    Developing,
    /// Disagrees strongly and misses every keyed question
    Exploring,
}

impl DemoProfile {
    fn label(&self) -> &'static str {
        match self {
            DemoProfile::Strong => "strong",
            DemoProfile::Developing => "developing",
            DemoProfile::Exploring => "exploring",
        }
    }

    /// Seconds the synthetic candidate lingers on each question.
    fn pace(&self) -> i64 {
        match self {
            DemoProfile::Strong => 18,
            DemoProfile::Developing => 32,
            DemoProfile::Exploring => 45,
        }
    }

    fn answer(&self, position: usize, question: &Question) -> Answer {
        if question.kind == QuestionKind::Likert {
            let level: u8 = match self {
                DemoProfile::Strong => 5,
                DemoProfile::Developing => 4,
                DemoProfile::Exploring => 1,
            };
            return Answer::from(level);
        }

        let key = question.correct_answer.unwrap_or(0);
        let choices = question.options.as_ref().map_or(1, Vec::len).max(1);
        let wrong = (key + 1) % choices;
        let pick = match self {
            DemoProfile::Strong => key,
            DemoProfile::Developing if position % 2 == 0 => key,
            DemoProfile::Developing | DemoProfile::Exploring => wrong,
        };
        Answer::from(pick)
    }
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let engine = cli_engine()?;
    let bank = engine.bank();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&bank.document())?);
        return Ok(());
    }

    println!("Question bank {} ({} questions)", bank.version(), bank.len());
    for section in bank.sections() {
        println!(
            "\n{} | {} questions | {}",
            section.title, section.questions, section.duration
        );
        println!("{}", section.description);
        for question in bank.questions_in(section.category) {
            println!(
                "- [{}] ({}) {}",
                question.id,
                question.kind.label(),
                question.question
            );
            if let Some(scenario) = &question.scenario {
                println!("    Scenario: {scenario}");
            }
            let choices = question
                .options
                .as_ref()
                .or(question.likert_labels.as_ref());
            if let Some(choices) = choices {
                for (index, choice) in choices.iter().enumerate() {
                    println!("    {index}. {choice}");
                }
            }
        }
    }

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let engine = cli_engine()?;
    let reader = BufReader::new(File::open(&args.responses)?);
    let responses: Vec<AssessmentResponse> = serde_json::from_reader(reader)?;
    let results = engine.compute(&responses);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!(
            "Scored {} responses from {}",
            responses.len(),
            args.responses.display()
        );
        render_results(&results);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = cli_engine()?;
    let profile = args.profile;

    println!("Career-fit assessment demo ({} candidate)", profile.label());
    let results = walk_through(&engine, profile)?;
    render_results(&results);
    Ok(())
}

fn walk_through(
    engine: &ScoringEngine,
    profile: DemoProfile,
) -> Result<AssessmentResults, AppError> {
    let bank = Arc::new(engine.bank().clone());
    let started_at = Utc::now();
    let mut session = AssessmentSession::new(bank.clone(), started_at);

    let mut at = started_at;
    for (position, question) in bank.all().iter().enumerate() {
        at += Duration::seconds(profile.pace());
        session.record(question.id.clone(), profile.answer(position, question), at)?;
    }

    println!("Section progress");
    for section in session.progress() {
        println!(
            "- {}: {}/{} answered",
            section.title, section.answered, section.total
        );
    }
    let elapsed = at - session.started_at();
    println!("Simulated time on assessment: {} min", elapsed.num_minutes());

    Ok(session.finish(engine)?)
}

fn render_results(results: &AssessmentResults) {
    println!("\nRecommendation: {}", results.recommendation.label());
    println!("Overall score: {}%", results.overall_score);
    println!("- Psychometric fit: {}%", results.psychometric_score);
    println!("- Technical aptitude: {}%", results.technical_score);
    println!("WISCAR dimensions");
    for dimension in WiscarDimension::ALL {
        println!(
            "  - {}: {}%",
            dimension.label(),
            results.wiscar_scores.get(dimension)
        );
    }
    println!("\n{}", results.feedback);
    println!("\nNext steps");
    for step in &results.next_steps {
        println!("- {step}");
    }
    println!("\nCareer paths to explore");
    for path in &results.career_paths {
        println!("- {path}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_fit::assessment::Recommendation;

    #[test]
    fn strong_walkthrough_is_recommended() {
        let engine = ScoringEngine::standard();
        let results = walk_through(&engine, DemoProfile::Strong).expect("session completes");

        assert_eq!(results.overall_score, 100);
        assert_eq!(results.recommendation, Recommendation::Yes);
    }

    #[test]
    fn exploring_walkthrough_is_pointed_elsewhere() {
        let engine = ScoringEngine::standard();
        let results = walk_through(&engine, DemoProfile::Exploring).expect("session completes");

        assert_eq!(results.technical_score, 0);
        assert_eq!(results.recommendation, Recommendation::No);
    }

    #[test]
    fn profiles_answer_likert_items_on_scale() {
        let engine = ScoringEngine::standard();
        let likert = engine
            .bank()
            .all()
            .iter()
            .find(|question| question.kind == QuestionKind::Likert)
            .expect("bank has likert items");

        assert_eq!(DemoProfile::Strong.answer(0, likert), Answer::from(5u8));
        assert_eq!(DemoProfile::Exploring.answer(0, likert), Answer::from(1u8));
    }
}
