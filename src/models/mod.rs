pub mod leaderboard;
pub mod trial;
