use crate::config::RankingConfig;
use crate::db::TrialStore;
use crate::error::AppError;
use crate::models::trial::*;
use crate::services::leaderboard;
use crate::validation;
use tracing::{info, warn};

pub fn save_trial<S: TrialStore>(
    store: &S,
    config: &RankingConfig,
    req: TrialSubmission,
) -> Result<TrialSaveResult, AppError> {
    let trial = match validate_submission(req) {
        Ok(trial) => trial,
        Err(e) => {
            warn!("rejected trial submission: {}", e);
            return Err(e);
        }
    };

    let id = store.insert_trial(&trial)?;
    let hits = trial.attempts.iter().filter(|a| a.is_hit).count();
    info!(%id, email = %trial.player_email, hits, "saved trial");

    // The trial is committed at this point; a failed rank read must not
    // report the save as failed.
    let rank = match leaderboard::get_player_rank(store, config, &trial.player_email) {
        Ok(entry) => entry.map(|entry| entry.rank),
        Err(e) => {
            warn!(%id, "saved trial but could not compute rank: {}", e);
            None
        }
    };

    Ok(TrialSaveResult {
        id,
        message: "Data saved successfully!".into(),
        rank,
    })
}

fn validate_submission(req: TrialSubmission) -> Result<NewTrial, AppError> {
    let player_email = validation::validate_email(req.email.as_deref())?;
    let attempts = validation::validate_attempts(req.results.as_deref())?;
    let age = validation::validate_age(req.age)?;
    let display_name = validation::validate_player_name(req.name.as_deref());

    Ok(NewTrial {
        player_email,
        display_name,
        age,
        attempts,
    })
}
