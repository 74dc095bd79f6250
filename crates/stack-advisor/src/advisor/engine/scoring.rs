use super::super::answers::AnswerSet;
use super::super::catalog::Catalog;
use super::super::rules::ScoringRuleTable;
use super::{RecommendationError, ScoreContribution};

/// Running total for one catalog candidate during a single invocation.
#[derive(Debug, Clone)]
pub(crate) struct CandidateScore {
    pub candidate: &'static str,
    pub score: u32,
    pub contributions: Vec<ScoreContribution>,
}

/// Builds a fresh score table seeded with every catalog candidate at zero, then applies
/// each answered rule. Pairs without a rule contribute nothing.
pub(crate) fn score_answers(
    catalog: &Catalog,
    rules: &ScoringRuleTable,
    answers: &AnswerSet,
) -> Result<Vec<CandidateScore>, RecommendationError> {
    let mut table: Vec<CandidateScore> = catalog
        .candidates()
        .iter()
        .map(|candidate| CandidateScore {
            candidate: candidate.id,
            score: 0,
            contributions: Vec::new(),
        })
        .collect();

    for (question, answer) in answers.iter() {
        let Some(increments) = rules.lookup(question, answer) else {
            continue;
        };

        for increment in increments {
            let entry = table
                .iter_mut()
                .find(|entry| entry.candidate == increment.candidate)
                .ok_or_else(|| RecommendationError::UnknownCandidate {
                    candidate: increment.candidate.to_string(),
                })?;

            entry.score = entry.score.saturating_add(increment.points);
            entry.contributions.push(ScoreContribution {
                question: question.to_string(),
                answer: answer.to_string(),
                points: increment.points,
            });
        }
    }

    Ok(table)
}
