use super::scoring::CandidateScore;

/// Orders by score descending and keeps the first `top_n`. The sort is stable, so equal
/// scores keep catalog order.
pub(crate) fn rank(mut scores: Vec<CandidateScore>, top_n: usize) -> Vec<CandidateScore> {
    scores.sort_by(|left, right| right.score.cmp(&left.score));
    scores.truncate(top_n);
    scores
}

/// `min(100, round(score * 100 / ceiling))`, rounding halves up, in integer arithmetic.
pub(crate) fn match_score(score: u32, ceiling: u32) -> u8 {
    let ceiling = u64::from(ceiling.max(1));
    let scaled = (200 * u64::from(score) + ceiling) / (2 * ceiling);
    scaled.min(100) as u8
}
