//! Questionnaire-driven recommendation of state-management libraries.
//!
//! The catalog, question set, and scoring rule table are immutable data; the engine is a
//! pure function over them, and the flow controller plus HTTP router are thin callers.

pub mod answers;
pub mod catalog;
pub mod engine;
pub mod flow;
pub mod questions;
pub mod router;
pub mod rules;

#[cfg(test)]
mod tests;

pub use answers::AnswerSet;
pub use catalog::{Candidate, Catalog, Difficulty, LearningCurve, PerformanceRating};
pub use engine::{
    AnswerError, AnswerValidation, CatalogError, EngineConfig, Recommendation,
    RecommendationEngine, RecommendationError, ScoreContribution, DEFAULT_SCORE_CEILING,
    DEFAULT_TOP_N,
};
pub use flow::{FlowError, FlowProgress, FlowState, QuestionFlow};
pub use questions::{Question, QuestionOption, QuestionSet};
pub use router::{advisor_router, RecommendationRequest, RecommendationResponse};
pub use rules::{RuleIncrement, ScoringRuleTable};
