use crate::models::leaderboard::ScoreSummary;
use crate::models::trial::AttemptOutcome;

/// Summarises the hits of one trial. Returns `None` when the trial has no
/// hit carrying a latency.
pub fn summarize(attempts: &[AttemptOutcome]) -> Option<ScoreSummary> {
    let hits: Vec<f64> = attempts
        .iter()
        .filter(|a| a.is_hit)
        .filter_map(|a| a.latency_seconds)
        .collect();

    if hits.is_empty() {
        return None;
    }

    let best_score = hits.iter().copied().fold(f64::INFINITY, f64::min);
    let average_score = hits.iter().sum::<f64>() / hits.len() as f64;

    Some(ScoreSummary {
        best_score,
        average_score,
    })
}
