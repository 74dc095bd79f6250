//! Linear questionnaire driver. Collects one answer per question and hands the completed
//! answer set to the engine exactly once, when the final question is answered.

use std::sync::Arc;

use super::answers::AnswerSet;
use super::engine::{Recommendation, RecommendationEngine, RecommendationError};
use super::questions::Question;

/// Where the flow stands after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Asking {
        index: usize,
        question_id: &'static str,
    },
    Complete {
        recommendations: Vec<Recommendation>,
    },
}

/// Progress bar data: 1-based step, question count, and rounded completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowProgress {
    pub step: usize,
    pub total: usize,
    pub percent: u8,
}

pub struct QuestionFlow {
    engine: Arc<RecommendationEngine>,
    step: usize,
    answers: AnswerSet,
    recommendations: Option<Vec<Recommendation>>,
}

impl QuestionFlow {
    pub fn new(engine: Arc<RecommendationEngine>) -> Self {
        Self {
            engine,
            step: 0,
            answers: AnswerSet::new(),
            recommendations: None,
        }
    }

    /// The question awaiting an answer, or `None` once the flow is complete.
    pub fn current(&self) -> Option<&Question> {
        if self.is_complete() {
            return None;
        }
        self.engine.questions().at(self.step)
    }

    pub fn state(&self) -> FlowState {
        match (&self.recommendations, self.current()) {
            (Some(recommendations), _) => FlowState::Complete {
                recommendations: recommendations.clone(),
            },
            (None, Some(question)) => FlowState::Asking {
                index: self.step,
                question_id: question.id,
            },
            // An empty question set never asks anything.
            (None, None) => FlowState::Complete {
                recommendations: Vec::new(),
            },
        }
    }

    /// Records `value` for the current question and moves forward.
    pub fn advance(&mut self, question_id: &str, value: &str) -> Result<FlowState, FlowError> {
        if self.is_complete() {
            return Err(FlowError::AlreadyComplete);
        }

        let questions = self.engine.questions();
        let question = questions.at(self.step).ok_or(FlowError::AlreadyComplete)?;

        if question.id != question_id {
            return Err(FlowError::UnexpectedQuestion {
                expected: question.id,
                received: question_id.to_string(),
            });
        }

        if !question.accepts(value) {
            return Err(FlowError::InvalidOption {
                question: question.id,
                value: value.to_string(),
            });
        }

        self.answers.insert(question.id, value);

        if self.step + 1 < questions.len() {
            self.step += 1;
            return Ok(self.state());
        }

        let recommendations = self.engine.recommend(&self.answers)?;
        self.recommendations = Some(recommendations.clone());
        Ok(FlowState::Complete { recommendations })
    }

    /// Steps back one question. From a completed flow this reopens the last question and
    /// discards the results; at the first question it stays put.
    pub fn back(&mut self) -> FlowState {
        if self.recommendations.take().is_none() && self.step > 0 {
            self.step -= 1;
        }
        self.state()
    }

    /// True once results exist, or immediately for a questionnaire with no questions.
    pub fn is_complete(&self) -> bool {
        self.recommendations.is_some() || self.engine.questions().is_empty()
    }

    pub fn progress(&self) -> FlowProgress {
        let total = self.engine.questions().len();
        let step = (self.step + 1).min(total);
        let percent = if total == 0 {
            100
        } else {
            ((200 * step + total) / (2 * total)).min(100) as u8
        };

        FlowProgress {
            step,
            total,
            percent,
        }
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn recommendations(&self) -> Option<&[Recommendation]> {
        self.recommendations.as_deref()
    }

    /// Clears answers and results and returns to the first question.
    pub fn restart(&mut self) -> FlowState {
        self.step = 0;
        self.answers.clear();
        self.recommendations = None;
        self.state()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("expected an answer for '{expected}', received '{received}'")]
    UnexpectedQuestion {
        expected: &'static str,
        received: String,
    },
    #[error("'{value}' is not an option for '{question}'")]
    InvalidOption {
        question: &'static str,
        value: String,
    },
    #[error("questionnaire already complete")]
    AlreadyComplete,
    #[error(transparent)]
    Recommendation(#[from] RecommendationError),
}
