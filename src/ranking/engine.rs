use crate::models::leaderboard::{LeaderboardView, PlayerEntry, RankedEntry, RankingOutcome};

/// Sorts ascending by best score and numbers entries from 1. The sort is
/// stable, so equal scores keep their input order and still get distinct
/// consecutive ranks.
pub fn rank_all(mut entries: Vec<PlayerEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| a.best_score.total_cmp(&b.best_score));
    entries
        .into_iter()
        .enumerate()
        .map(|(i, player)| RankedEntry { rank: i + 1, player })
        .collect()
}

pub fn rank(entries: Vec<PlayerEntry>, window_size: usize, email: Option<&str>) -> RankingOutcome {
    let ranked = rank_all(entries);

    let requested_player = email.and_then(|email| {
        ranked
            .iter()
            .find(|entry| entry.player.email == email)
            .cloned()
    });
    let in_window = requested_player
        .as_ref()
        .is_some_and(|entry| entry.rank <= window_size);

    let mut ranked_top = ranked;
    ranked_top.truncate(window_size);

    RankingOutcome {
        ranked_top,
        requested_player,
        in_window,
    }
}

pub fn assemble(outcome: RankingOutcome) -> LeaderboardView {
    let requested_player = if outcome.in_window {
        None
    } else {
        outcome.requested_player
    };

    LeaderboardView {
        top: outcome.ranked_top,
        requested_player,
    }
}
