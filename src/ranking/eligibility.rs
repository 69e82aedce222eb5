use crate::models::leaderboard::PlayerEntry;

/// Drops entries with a blank name or a best score at or below the floor.
pub fn eligible(entries: Vec<PlayerEntry>, min_plausible_latency_seconds: f64) -> Vec<PlayerEntry> {
    entries
        .into_iter()
        .filter(|e| !e.name.trim().is_empty())
        .filter(|e| e.best_score > min_plausible_latency_seconds)
        .collect()
}
