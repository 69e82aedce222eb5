use crate::models::trial::{AttemptOutcome, NewTrial, TrialRecord};
use chrono::Utc;
use rusqlite::{params, Connection};
use std::sync::Mutex;
use uuid::Uuid;

const SCHEMA: &str = include_str!("schema.sql");

/// Read and write access to stored trials.
pub trait TrialStore {
    fn insert_trial(&self, trial: &NewTrial) -> Result<String, rusqlite::Error>;

    /// Every stored trial in insertion order, attempts in attempt order.
    fn all_trials(&self) -> Result<Vec<TrialRecord>, rusqlite::Error>;
}

pub struct Db {
    conn: Mutex<Connection>,
}

impl Db {
    pub fn open(path: &str) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Db {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Db {
            conn: Mutex::new(conn),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T, rusqlite::Error>
    where
        F: FnOnce(&mut Connection) -> Result<T, rusqlite::Error>,
    {
        let mut conn = self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut conn)
    }
}

impl TrialStore for Db {
    fn insert_trial(&self, trial: &NewTrial) -> Result<String, rusqlite::Error> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

        self.with_conn(|conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO trials (id, email, name, age, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, trial.player_email, trial.display_name, trial.age, created_at],
            )?;
            let seq = tx.last_insert_rowid();
            {
                let mut stmt = tx.prepare(
                    "INSERT INTO attempts (trial_seq, attempt_no, is_hit, latency_seconds)
                     VALUES (?1, ?2, ?3, ?4)",
                )?;
                for (i, attempt) in trial.attempts.iter().enumerate() {
                    let hit_int: i64 = if attempt.is_hit { 1 } else { 0 };
                    stmt.execute(params![seq, i as i64 + 1, hit_int, attempt.latency_seconds])?;
                }
            }
            tx.commit()?;
            Ok(id.clone())
        })
    }

    fn all_trials(&self) -> Result<Vec<TrialRecord>, rusqlite::Error> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT t.id, t.email, t.name, a.is_hit, a.latency_seconds
                 FROM trials t LEFT JOIN attempts a ON a.trial_seq = t.seq
                 ORDER BY t.seq, a.attempt_no",
            )?;
            let rows = stmt.query_map([], |row| {
                let attempt = match row.get::<_, Option<i64>>(3)? {
                    Some(is_hit) => Some(AttemptOutcome {
                        is_hit: is_hit != 0,
                        latency_seconds: row.get(4)?,
                    }),
                    None => None,
                };
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    attempt,
                ))
            })?;

            let mut records: Vec<TrialRecord> = Vec::new();
            for row in rows {
                let (id, email, name, attempt) = row?;
                let same_trial = records.last().is_some_and(|r| r.id == id);
                if !same_trial {
                    records.push(TrialRecord {
                        id,
                        player_email: email,
                        display_name: name,
                        attempts: Vec::new(),
                    });
                }
                if let (Some(attempt), Some(record)) = (attempt, records.last_mut()) {
                    record.attempts.push(attempt);
                }
            }
            Ok(records)
        })
    }
}
