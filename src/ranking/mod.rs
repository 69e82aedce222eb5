//! Leaderboard computation over a snapshot of stored trials.
//!
//! Each call builds its own state from the records it is given and shares
//! nothing with other calls. The pipeline is: summarise each trial, keep the
//! best trial per email, drop ineligible players, rank, then fold the
//! requested player into the view.

pub mod aggregate;
pub mod eligibility;
pub mod engine;
pub mod score;

use crate::config::RankingConfig;
use crate::models::leaderboard::{LeaderboardView, RankedEntry};
use crate::models::trial::TrialRecord;

pub fn compute_leaderboard(
    records: &[TrialRecord],
    requested_email: Option<&str>,
    config: &RankingConfig,
) -> LeaderboardView {
    let players = aggregate::best_per_player(records);
    let players = eligibility::eligible(players, config.min_plausible_latency_seconds);
    let outcome = engine::rank(players, config.window_size, requested_email);
    engine::assemble(outcome)
}

/// Full rank of one player among all eligible players, ignoring the window.
pub fn rank_of(records: &[TrialRecord], email: &str, config: &RankingConfig) -> Option<RankedEntry> {
    let players = aggregate::best_per_player(records);
    let players = eligibility::eligible(players, config.min_plausible_latency_seconds);
    engine::rank_all(players)
        .into_iter()
        .find(|entry| entry.player.email == email)
}
