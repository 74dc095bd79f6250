use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::advisor::catalog::{Candidate, Catalog, Difficulty, LearningCurve, PerformanceRating};
use crate::advisor::questions::{Question, QuestionOption, QuestionSet};
use crate::advisor::{AnswerSet, EngineConfig, RecommendationEngine, ScoringRuleTable};

pub(super) fn standard_engine() -> RecommendationEngine {
    RecommendationEngine::standard(EngineConfig::default()).expect("standard tables consistent")
}

pub(super) fn shared_engine() -> Arc<RecommendationEngine> {
    Arc::new(standard_engine())
}

/// small / beginner / simple / forms / not-critical / gentle
pub(super) fn starter_answers() -> AnswerSet {
    AnswerSet::new()
        .with("projectSize", "small")
        .with("teamExperience", "beginner")
        .with("stateComplexity", "simple")
        .with("primaryUse", "forms")
        .with("performance", "not-critical")
        .with("learningCurve", "gentle")
}

/// Copy of `answers` with `question_id` left unanswered.
pub(super) fn without(answers: &AnswerSet, question_id: &str) -> AnswerSet {
    answers
        .iter()
        .filter(|(question, _)| *question != question_id)
        .collect()
}

/// large / expert / complex / shared-state / critical / willing
pub(super) fn enterprise_answers() -> AnswerSet {
    AnswerSet::new()
        .with("projectSize", "large")
        .with("teamExperience", "expert")
        .with("stateComplexity", "complex")
        .with("primaryUse", "shared-state")
        .with("performance", "critical")
        .with("learningCurve", "willing")
}

/// Every combination of valid options in the standard question set.
pub(super) fn all_answer_sets() -> Vec<AnswerSet> {
    let questions = QuestionSet::standard();
    let mut sets = vec![AnswerSet::new()];
    for question in questions.questions() {
        sets = sets
            .into_iter()
            .flat_map(|partial| {
                question
                    .options
                    .iter()
                    .map(move |option| partial.clone().with(question.id, option.value))
            })
            .collect();
    }
    sets
}

pub(super) fn bare_candidate(id: &'static str) -> Candidate {
    Candidate {
        id,
        name: id,
        description: "fixture candidate",
        pros: Vec::new(),
        cons: Vec::new(),
        best_for: Vec::new(),
        difficulty: Difficulty::Easy,
        performance: PerformanceRating::Good,
        learning_curve: LearningCurve::Gentle,
        installation: "n/a",
        code_example: "",
    }
}

pub(super) fn yes_no_question(id: &'static str) -> Question {
    Question {
        id,
        prompt: "fixture question",
        options: vec![
            QuestionOption {
                value: "yes",
                label: "Yes",
                glyph: "+",
            },
            QuestionOption {
                value: "no",
                label: "No",
                glyph: "-",
            },
        ],
    }
}

/// Four candidates, two questions; "alpha" and "gamma" always tie.
pub(super) fn tie_engine(config: EngineConfig) -> RecommendationEngine {
    let catalog = Catalog::from_candidates(vec![
        bare_candidate("alpha"),
        bare_candidate("beta"),
        bare_candidate("gamma"),
        bare_candidate("delta"),
    ]);
    let questions =
        QuestionSet::from_questions(vec![yes_no_question("first"), yes_no_question("second")]);
    let mut rules = ScoringRuleTable::new();
    rules.insert("first", "yes", &[("gamma", 10), ("alpha", 10), ("beta", 5)]);
    rules.insert("second", "yes", &[("alpha", 20), ("gamma", 20)]);
    rules.insert("second", "no", &[("delta", 50)]);

    RecommendationEngine::new(catalog, questions, rules, config)
        .expect("fixture tables consistent")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
