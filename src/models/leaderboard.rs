use serde::{Deserialize, Serialize};

/// Best and mean latency over the hits of a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub best_score: f64,
    pub average_score: f64,
}

/// A player's best trial after collapsing all of their submissions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerEntry {
    pub name: String,
    pub email: String,
    pub best_score: f64,
    pub average_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub player: PlayerEntry,
}

/// Result of ranking before the requested player is folded into the view.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingOutcome {
    pub ranked_top: Vec<RankedEntry>,
    pub requested_player: Option<RankedEntry>,
    pub in_window: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardView {
    pub top: Vec<RankedEntry>,
    /// Present only when the requested player ranks outside `top`.
    pub requested_player: Option<RankedEntry>,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub email: Option<String>,
}
