mod config;
mod ranking;
mod scoring;

pub use config::{AnswerValidation, EngineConfig, DEFAULT_SCORE_CEILING, DEFAULT_TOP_N};

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::answers::AnswerSet;
use super::catalog::{Candidate, Catalog};
use super::questions::QuestionSet;
use super::rules::ScoringRuleTable;

/// Stateless scorer over an immutable catalog, question set, and rule table.
///
/// Construction checks the three for consistency, so a successfully built engine never
/// references a candidate, question, or option that does not exist.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Catalog,
    questions: QuestionSet,
    rules: ScoringRuleTable,
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(
        catalog: Catalog,
        questions: QuestionSet,
        rules: ScoringRuleTable,
        config: EngineConfig,
    ) -> Result<Self, CatalogError> {
        config.validate()?;
        check_consistency(&catalog, &questions, &rules)?;

        debug!(
            candidates = catalog.len(),
            questions = questions.len(),
            top_n = config.top_n,
            score_ceiling = config.score_ceiling,
            "recommendation engine configured"
        );

        Ok(Self {
            catalog,
            questions,
            rules,
            config,
        })
    }

    /// Engine over the shipped catalog, questionnaire, and weights.
    pub fn standard(config: EngineConfig) -> Result<Self, CatalogError> {
        Self::new(
            Catalog::standard(),
            QuestionSet::standard(),
            ScoringRuleTable::standard(),
            config,
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn rules(&self) -> &ScoringRuleTable {
        &self.rules
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ranks the catalog against `answers` using the configured validation mode.
    pub fn recommend(
        &self,
        answers: &AnswerSet,
    ) -> Result<Vec<Recommendation>, RecommendationError> {
        self.recommend_with(answers, self.config.validation)
    }

    pub fn recommend_with(
        &self,
        answers: &AnswerSet,
        validation: AnswerValidation,
    ) -> Result<Vec<Recommendation>, RecommendationError> {
        if validation == AnswerValidation::Strict {
            self.validate_answers(answers)?;
        }

        let scores = scoring::score_answers(&self.catalog, &self.rules, answers)?;
        let ranked = ranking::rank(scores, self.config.top_n);

        let recommendations = ranked
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let candidate = self.catalog.get(entry.candidate).cloned().ok_or_else(|| {
                    RecommendationError::UnknownCandidate {
                        candidate: entry.candidate.to_string(),
                    }
                })?;

                Ok(Recommendation {
                    rank: index + 1,
                    candidate,
                    match_score: ranking::match_score(entry.score, self.config.score_ceiling),
                    raw_score: entry.score,
                    contributions: entry.contributions,
                })
            })
            .collect::<Result<Vec<_>, RecommendationError>>()?;

        debug!(
            answered = answers.len(),
            top = ?recommendations.first().map(|rec| rec.candidate.id),
            "recommendations computed"
        );

        Ok(recommendations)
    }

    /// Checks every answer against the question set without scoring.
    pub fn validate_answers(&self, answers: &AnswerSet) -> Result<(), AnswerError> {
        for (question_id, value) in answers.iter() {
            let question =
                self.questions
                    .get(question_id)
                    .ok_or_else(|| AnswerError::UnknownQuestion {
                        question: question_id.to_string(),
                    })?;

            if !question.accepts(value) {
                return Err(AnswerError::UnknownOption {
                    question: question.id.to_string(),
                    value: value.to_string(),
                    expected: question.option_values(),
                });
            }
        }
        Ok(())
    }

    pub fn missing_questions(&self, answers: &AnswerSet) -> Vec<&'static str> {
        answers.missing(&self.questions)
    }
}

fn check_consistency(
    catalog: &Catalog,
    questions: &QuestionSet,
    rules: &ScoringRuleTable,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for candidate in catalog.candidates() {
        if !seen.insert(candidate.id) {
            return Err(CatalogError::DuplicateCandidate(candidate.id.to_string()));
        }
    }

    let mut seen = HashSet::new();
    for question in questions.questions() {
        if !seen.insert(question.id) {
            return Err(CatalogError::DuplicateQuestion(question.id.to_string()));
        }
    }

    for (question_id, answer, increment) in rules.entries() {
        let question = questions
            .get(question_id)
            .ok_or_else(|| CatalogError::UnknownQuestion(question_id.to_string()))?;

        if !question.accepts(answer) {
            return Err(CatalogError::UnknownAnswer {
                question: question_id.to_string(),
                answer: answer.to_string(),
            });
        }

        if catalog.get(increment.candidate).is_none() {
            return Err(CatalogError::UnknownCandidate {
                question: question_id.to_string(),
                answer: answer.to_string(),
                candidate: increment.candidate.to_string(),
            });
        }
    }

    Ok(())
}

/// One rule hit that fed a candidate's raw score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreContribution {
    pub question: String,
    pub answer: String,
    pub points: u32,
}

/// A ranked candidate with its normalized match score and the rule hits behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub rank: usize,
    #[serde(flatten)]
    pub candidate: Candidate,
    pub match_score: u8,
    pub raw_score: u32,
    pub contributions: Vec<ScoreContribution>,
}

/// Inconsistent catalog, question set, rule table, or engine settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("candidate '{0}' is registered more than once")]
    DuplicateCandidate(String),
    #[error("question '{0}' is defined more than once")]
    DuplicateQuestion(String),
    #[error("scoring rule references unknown question '{0}'")]
    UnknownQuestion(String),
    #[error("scoring rule {question}/{answer} references an option the question does not offer")]
    UnknownAnswer { question: String, answer: String },
    #[error("scoring rule {question}/{answer} references unknown candidate '{candidate}'")]
    UnknownCandidate {
        question: String,
        answer: String,
        candidate: String,
    },
    #[error("top_n must be at least 1")]
    InvalidTopN,
    #[error("score ceiling must be greater than zero")]
    InvalidScoreCeiling,
}

/// Answer that does not fit the question set; only raised under strict validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("unknown question '{question}'")]
    UnknownQuestion { question: String },
    #[error("'{value}' is not a valid answer for '{question}' (expected one of: {})", .expected.join(", "))]
    UnknownOption {
        question: String,
        value: String,
        expected: Vec<&'static str>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecommendationError {
    #[error(transparent)]
    InvalidAnswer(#[from] AnswerError),
    #[error("candidate '{candidate}' is missing from the catalog")]
    UnknownCandidate { candidate: String },
}
