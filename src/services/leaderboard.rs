use crate::config::RankingConfig;
use crate::db::TrialStore;
use crate::error::AppError;
use crate::models::leaderboard::{LeaderboardView, RankedEntry};
use crate::ranking;
use tracing::debug;

/// Treats a blank email the same as no email.
fn requested_email(email: Option<&str>) -> Option<&str> {
    email.map(str::trim).filter(|e| !e.is_empty())
}

pub fn get_leaderboard<S: TrialStore>(
    store: &S,
    config: &RankingConfig,
    email: Option<&str>,
) -> Result<LeaderboardView, AppError> {
    let records = store.all_trials()?;
    let view = ranking::compute_leaderboard(&records, requested_email(email), config);
    debug!(
        records = records.len(),
        top = view.top.len(),
        window = config.window_size,
        requested_found = view.requested_player.is_some(),
        "computed leaderboard"
    );
    Ok(view)
}

pub fn get_player_rank<S: TrialStore>(
    store: &S,
    config: &RankingConfig,
    email: &str,
) -> Result<Option<RankedEntry>, AppError> {
    let records = store.all_trials()?;
    Ok(ranking::rank_of(&records, email, config))
}
