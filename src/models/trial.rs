use serde::{Deserialize, Serialize};

/// One attempt inside a trial, in its canonical stored form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptOutcome {
    pub is_hit: bool,
    /// Reaction time in seconds; only meaningful when `is_hit` is set.
    pub latency_seconds: Option<f64>,
}

impl AttemptOutcome {
    pub fn hit(latency_seconds: f64) -> Self {
        AttemptOutcome {
            is_hit: true,
            latency_seconds: Some(latency_seconds),
        }
    }

    pub fn miss() -> Self {
        AttemptOutcome {
            is_hit: false,
            latency_seconds: None,
        }
    }
}

/// One stored submission for a player, as read back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    pub id: String,
    pub player_email: String,
    pub display_name: String,
    pub attempts: Vec<AttemptOutcome>,
}

/// A validated submission that is ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewTrial {
    pub player_email: String,
    pub display_name: String,
    pub age: Option<i64>,
    pub attempts: Vec<AttemptOutcome>,
}

#[derive(Debug, Deserialize)]
pub struct TrialSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub results: Option<Vec<AttemptInput>>,
}

/// Attempt as sent by clients. Older clients send a formatted string such
/// as `"✅ 0.234 sec"` instead of a structured outcome. The client's own
/// attempt number is ignored; list order is the attempt order.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AttemptInput {
    Structured {
        hit: bool,
        #[serde(default)]
        latency_seconds: Option<f64>,
    },
    Legacy { result: String },
}

#[derive(Debug, Serialize)]
pub struct TrialSaveResult {
    pub id: String,
    pub message: String,
    pub rank: Option<usize>,
}
