//! SQLite-based local persistence.
//!
//! Provides the local fallback store:
//! - `kv` table: key `"habits"` holds the JSON-serialized habit list,
//!   key `"level"` the stringified level
//! - `entry_history` table: one row per recorded entry update

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::data_dir;
use crate::error::StorageError;
use crate::habit::Habit;
use crate::tracker::TrackerSession;

const HABITS_KEY: &str = "habits";
const LEVEL_KEY: &str = "level";

/// One logged entry update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryHistoryRecord {
    pub id: i64,
    pub habit: String,
    pub date: NaiveDate,
    pub value: String,
    pub completed: bool,
    pub recorded_at: DateTime<Utc>,
}

/// SQLite database for session state and entry history.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/missiontrack/missiontrack.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        let path = data_dir()?.join("missiontrack.db");
        Self::open_at(&path)
    }

    /// Open a database at an explicit path (tests, alternate profiles).
    pub fn open_at(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|source| StorageError::OpenFailed {
            path: ":memory:".into(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS entry_history (
                    id          INTEGER PRIMARY KEY AUTOINCREMENT,
                    habit       TEXT NOT NULL,
                    date        TEXT NOT NULL,
                    value       TEXT NOT NULL,
                    completed   INTEGER NOT NULL,
                    recorded_at TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_entry_history_habit ON entry_history(habit);
                CREATE INDEX IF NOT EXISTS idx_entry_history_date ON entry_history(date);",
            )
            .map_err(|e| StorageError::MigrationFailed(e.to_string()))
    }

    /// Load the persisted session, or `None` when nothing has been saved yet.
    ///
    /// A missing level alongside existing habits defaults to 1.
    pub fn load_session(&self) -> Result<Option<TrackerSession>, StorageError> {
        let habits_json = match self.kv_get(HABITS_KEY)? {
            Some(json) => json,
            None => return Ok(None),
        };
        let habits: Vec<Habit> =
            serde_json::from_str(&habits_json).map_err(|e| StorageError::Corrupt {
                key: HABITS_KEY.into(),
                message: e.to_string(),
            })?;
        let level = match self.kv_get(LEVEL_KEY)? {
            Some(raw) => raw.parse::<u32>().map_err(|e| StorageError::Corrupt {
                key: LEVEL_KEY.into(),
                message: e.to_string(),
            })?,
            None => 1,
        };
        Ok(Some(TrackerSession::new(habits, level)))
    }

    /// Persist the whole session.
    pub fn save_session(&self, session: &TrackerSession) -> Result<(), StorageError> {
        let habits_json =
            serde_json::to_string(session.habits()).map_err(|e| StorageError::Corrupt {
                key: HABITS_KEY.into(),
                message: e.to_string(),
            })?;
        self.kv_put(HABITS_KEY, &habits_json)?;
        self.kv_put(LEVEL_KEY, &session.level().to_string())?;
        debug!(
            habits = session.habits().len(),
            level = session.level(),
            "session saved"
        );
        Ok(())
    }

    /// Log one entry update to the history table.
    pub fn record_entry_update(
        &self,
        habit: &str,
        date: NaiveDate,
        value: &str,
        completed: bool,
    ) -> Result<i64, StorageError> {
        self.conn.execute(
            "INSERT INTO entry_history (habit, date, value, completed, recorded_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                habit,
                date.to_string(),
                value,
                completed,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Most recent entry updates, newest first.
    pub fn recent_history(&self, limit: usize) -> Result<Vec<EntryHistoryRecord>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, habit, date, value, completed, recorded_at
             FROM entry_history ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, bool>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, habit, date, value, completed, recorded_at) = row?;
            let date = date.parse::<NaiveDate>().map_err(|e| {
                StorageError::QueryFailed(format!("bad date in history row {id}: {e}"))
            })?;
            let recorded_at = DateTime::parse_from_rfc3339(&recorded_at)
                .map_err(|e| {
                    StorageError::QueryFailed(format!("bad timestamp in history row {id}: {e}"))
                })?
                .with_timezone(&Utc);
            records.push(EntryHistoryRecord {
                id,
                habit,
                date,
                value,
                completed,
                recorded_at,
            });
        }
        Ok(records)
    }

    fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn kv_put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::default_habits;

    #[test]
    fn fresh_database_has_no_session() {
        let db = Database::open_memory().unwrap();
        assert!(db.load_session().unwrap().is_none());
    }

    #[test]
    fn session_roundtrip_preserves_entries_streaks_and_level() {
        let db = Database::open_memory().unwrap();

        let mut habits = default_habits();
        habits[3]
            .entries
            .insert(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(), "35".into());
        habits[3].streak = 7;
        let session = TrackerSession::new(habits, 4);
        db.save_session(&session).unwrap();

        let loaded = db.load_session().unwrap().unwrap();
        assert_eq!(loaded.level(), 4);
        assert_eq!(loaded.habits().len(), 16);
        assert_eq!(loaded.habits()[3].streak, 7);
        assert_eq!(
            loaded.habits()[3].entry(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            Some("35")
        );
    }

    #[test]
    fn save_overwrites_previous_state() {
        let db = Database::open_memory().unwrap();
        db.save_session(&TrackerSession::new(default_habits(), 2))
            .unwrap();
        db.save_session(&TrackerSession::new(Vec::new(), 5)).unwrap();

        let loaded = db.load_session().unwrap().unwrap();
        assert_eq!(loaded.level(), 5);
        assert!(loaded.habits().is_empty());
    }

    #[test]
    fn missing_level_defaults_to_one() {
        let db = Database::open_memory().unwrap();
        db.kv_put(HABITS_KEY, "[]").unwrap();
        let loaded = db.load_session().unwrap().unwrap();
        assert_eq!(loaded.level(), 1);
    }

    #[test]
    fn corrupt_level_is_reported() {
        let db = Database::open_memory().unwrap();
        db.kv_put(HABITS_KEY, "[]").unwrap();
        db.kv_put(LEVEL_KEY, "eleven").unwrap();
        let err = db.load_session().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { key, .. } if key == LEVEL_KEY));
    }

    #[test]
    fn history_is_returned_newest_first() {
        let db = Database::open_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        db.record_entry_update("Pushups", date, "10", false).unwrap();
        db.record_entry_update("Pushups", date, "35", true).unwrap();
        db.record_entry_update("Water Intake", date, "3", false)
            .unwrap();

        let history = db.recent_history(2).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].habit, "Water Intake");
        assert_eq!(history[1].value, "35");
        assert!(history[1].completed);
    }
}
