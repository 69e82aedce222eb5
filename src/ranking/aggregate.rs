use super::score;
use crate::models::leaderboard::PlayerEntry;
use crate::models::trial::TrialRecord;
use std::collections::HashMap;

/// Collapses records to one entry per email, keeping the record with the
/// lowest best score. Entries come back in first-seen email order; an
/// improved record replaces its entry in place.
pub fn best_per_player(records: &[TrialRecord]) -> Vec<PlayerEntry> {
    let mut entries: Vec<PlayerEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let Some(summary) = score::summarize(&record.attempts) else {
            continue;
        };

        let candidate = PlayerEntry {
            name: record.display_name.clone(),
            email: record.player_email.clone(),
            best_score: summary.best_score,
            average_score: summary.average_score,
        };

        match index.get(record.player_email.as_str()) {
            Some(&slot) => {
                // Equal scores keep the earlier record.
                if candidate.best_score < entries[slot].best_score {
                    entries[slot] = candidate;
                }
            }
            None => {
                index.insert(record.player_email.as_str(), entries.len());
                entries.push(candidate);
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trial::AttemptOutcome;

    fn record(email: &str, name: &str, hits: &[f64]) -> TrialRecord {
        TrialRecord {
            id: format!("{}-{}", email, name),
            player_email: email.into(),
            display_name: name.into(),
            attempts: hits.iter().map(|&h| AttemptOutcome::hit(h)).collect(),
        }
    }

    #[test]
    fn test_improvement_replaces_whole_entry() {
        let entries = best_per_player(&[
            record("p@x.com", "First", &[0.30, 0.40]),
            record("p@x.com", "Second", &[0.25, 0.35]),
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Second");
        assert_eq!(entries[0].best_score, 0.25);
        assert!((entries[0].average_score - 0.30).abs() < 1e-9);
    }

    #[test]
    fn test_worse_record_is_ignored() {
        let entries = best_per_player(&[
            record("p@x.com", "Fast", &[0.20]),
            record("p@x.com", "Slow", &[0.50]),
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Fast");
    }

    #[test]
    fn test_equal_score_keeps_first_record() {
        let entries = best_per_player(&[
            record("p@x.com", "Earlier", &[0.22, 0.30]),
            record("p@x.com", "Later", &[0.22]),
        ]);
        assert_eq!(entries[0].name, "Earlier");
        assert!((entries[0].average_score - 0.26).abs() < 1e-9);
    }

    #[test]
    fn test_scoreless_record_creates_no_entry() {
        let misses = TrialRecord {
            id: "m".into(),
            player_email: "m@x.com".into(),
            display_name: "Misses".into(),
            attempts: vec![AttemptOutcome::miss(), AttemptOutcome::miss()],
        };
        let entries = best_per_player(&[misses, record("a@x.com", "A", &[0.3])]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].email, "a@x.com");
    }

    #[test]
    fn test_first_seen_order_is_kept() {
        let entries = best_per_player(&[
            record("a@x.com", "A", &[0.40]),
            record("b@x.com", "B", &[0.30]),
            record("a@x.com", "A2", &[0.20]),
        ]);
        let emails: Vec<&str> = entries.iter().map(|e| e.email.as_str()).collect();
        assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
    }
}
