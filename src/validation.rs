use crate::error::AppError;
use crate::models::trial::{AttemptInput, AttemptOutcome};

const MAX_PLAYER_NAME_LEN: usize = 32;
const MAX_EMAIL_LEN: usize = 254;
const MAX_ATTEMPTS: usize = 50;
const MAX_AGE: i64 = 150;
const LEGACY_HIT_MARK: &str = "✅";
const LEGACY_UNIT: &str = "sec";

pub fn validate_email(email: Option<&str>) -> Result<String, AppError> {
    let trimmed = email.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Missing required field: email".into()));
    }
    if trimmed.len() > MAX_EMAIL_LEN || !trimmed.contains('@') {
        return Err(AppError::BadRequest(format!("Invalid email: {}", trimmed)));
    }
    Ok(trimmed.to_string())
}

/// Blank names are kept blank; the leaderboard leaves them out.
pub fn validate_player_name(name: Option<&str>) -> String {
    name.unwrap_or_default()
        .trim()
        .chars()
        .take(MAX_PLAYER_NAME_LEN)
        .collect()
}

pub fn validate_age(age: Option<i64>) -> Result<Option<i64>, AppError> {
    match age {
        Some(a) if !(0..=MAX_AGE).contains(&a) => {
            Err(AppError::BadRequest(format!("Age must be 0-{}", MAX_AGE)))
        }
        other => Ok(other),
    }
}

pub fn validate_attempts(results: Option<&[AttemptInput]>) -> Result<Vec<AttemptOutcome>, AppError> {
    let results = match results {
        Some(r) if !r.is_empty() => r,
        _ => return Err(AppError::BadRequest("Missing required field: results".into())),
    };
    if results.len() > MAX_ATTEMPTS {
        return Err(AppError::BadRequest(format!(
            "At most {} attempts per submission",
            MAX_ATTEMPTS
        )));
    }
    results.iter().map(to_outcome).collect()
}

fn to_outcome(input: &AttemptInput) -> Result<AttemptOutcome, AppError> {
    match input {
        AttemptInput::Structured {
            hit: true,
            latency_seconds,
        } => match latency_seconds {
            Some(l) if l.is_finite() && *l >= 0.0 => Ok(AttemptOutcome::hit(*l)),
            _ => Err(AppError::BadRequest(
                "A hit needs a non-negative latency_seconds".into(),
            )),
        },
        AttemptInput::Structured { hit: false, .. } => Ok(AttemptOutcome::miss()),
        AttemptInput::Legacy { result } => Ok(parse_legacy_result(result)),
    }
}

/// Translates old-style strings like `"✅ 0.234 sec"`. Anything else,
/// including a hit mark with an unreadable number, counts as a miss.
/// Parsing is strict: the whole remainder after dropping `sec` must be a
/// number, so `"✅ 0.234 seconds"` is a miss rather than a prefix match.
pub fn parse_legacy_result(result: &str) -> AttemptOutcome {
    let latency = result
        .trim()
        .strip_prefix(LEGACY_HIT_MARK)
        .map(|rest| rest.trim())
        .map(|rest| rest.strip_suffix(LEGACY_UNIT).unwrap_or(rest).trim())
        .and_then(|number| number.parse::<f64>().ok())
        .filter(|l| l.is_finite() && *l >= 0.0);

    match latency {
        Some(l) => AttemptOutcome::hit(l),
        None => AttemptOutcome::miss(),
    }
}
