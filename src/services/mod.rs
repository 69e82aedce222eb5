pub mod leaderboard;
pub mod trials;
