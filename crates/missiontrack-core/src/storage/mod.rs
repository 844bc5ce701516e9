mod config;
pub mod database;

pub use config::{BackendConfig, Config, NotificationsConfig, ViewConfig};
pub use database::{Database, EntryHistoryRecord};

use std::path::PathBuf;

use crate::error::{Result, StorageError};
use crate::tracker::TrackerSession;

/// Returns `~/.config/missiontrack[-dev]/` based on MISSIONTRACK_ENV.
///
/// Set MISSIONTRACK_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MISSIONTRACK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("missiontrack-dev")
    } else {
        base_dir.join("missiontrack")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}

/// Load the persisted session, seeding the default habit list on first run
/// when the config asks for it.
pub fn load_session(db: &Database, config: &Config) -> Result<TrackerSession> {
    match db.load_session()? {
        Some(session) => Ok(session),
        None if config.seed_defaults => Ok(TrackerSession::with_defaults()),
        None => Ok(TrackerSession::new(Vec::new(), 1)),
    }
}
