//! Runtime configuration read from the environment.
//!
//! Every value has a default; a malformed override is logged and ignored.

use std::str::FromStr;
use tracing::warn;

/// Size of the top-N window returned by the leaderboard.
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Best scores at or below this many seconds are treated as false starts.
pub const MIN_PLAUSIBLE_LATENCY_SECONDS: f64 = 0.150;

/// Tunables for the ranking core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingConfig {
    pub window_size: usize,
    pub min_plausible_latency_seconds: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            min_plausible_latency_seconds: MIN_PLAUSIBLE_LATENCY_SECONDS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub ranking: RankingConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, so tests need not touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let database_path =
            lookup("DATABASE_PATH").unwrap_or_else(|| "reaction-board.db".into());
        let port = parse_or(&lookup, "PORT", 8081u16, |_| true);

        let defaults = RankingConfig::default();
        let window_size = parse_or(&lookup, "LEADERBOARD_WINDOW", defaults.window_size, |n: &usize| {
            *n > 0
        });
        let min_plausible_latency_seconds = parse_or(
            &lookup,
            "MIN_PLAUSIBLE_LATENCY",
            defaults.min_plausible_latency_seconds,
            |v: &f64| v.is_finite() && *v >= 0.0,
        );

        Config {
            host,
            port,
            database_path,
            ranking: RankingConfig {
                window_size,
                min_plausible_latency_seconds,
            },
        }
    }
}

fn parse_or<F, T, V>(lookup: &F, key: &str, default: T, valid: V) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy,
    V: Fn(&T) -> bool,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) if valid(&value) => value,
            _ => {
                warn!("ignoring invalid {}={:?}, using default", key, raw);
                default
            }
        },
    }
}
