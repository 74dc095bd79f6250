use super::CatalogError;

pub const DEFAULT_TOP_N: usize = 3;

/// Denominator used to turn a raw score into a match percentage.
///
/// No answer combination in the standard rule table accumulates more than 145 points,
/// so 200 leaves headroom; anything above it clamps to 100%.
pub const DEFAULT_SCORE_CEILING: u32 = 200;

/// How the engine treats answers that do not match the question set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerValidation {
    /// Unknown questions and values contribute nothing.
    #[default]
    Lenient,
    /// Unknown questions and values are rejected.
    Strict,
}

impl AnswerValidation {
    pub const fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// Tunables for ranking and normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub top_n: usize,
    pub score_ceiling: u32,
    pub validation: AnswerValidation,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            score_ceiling: DEFAULT_SCORE_CEILING,
            validation: AnswerValidation::Lenient,
        }
    }
}

impl EngineConfig {
    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        if self.top_n == 0 {
            return Err(CatalogError::InvalidTopN);
        }
        if self.score_ceiling == 0 {
            return Err(CatalogError::InvalidScoreCeiling);
        }
        Ok(())
    }
}
