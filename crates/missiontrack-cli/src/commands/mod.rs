pub mod config;
pub mod entry;
pub mod habit;
pub mod progress;
pub mod sync;

use missiontrack_core::{Config, Database, TrackerSession};

/// Load the persisted session, seeding the default habit list on first run
/// when the config asks for it.
pub fn load_session(
    db: &Database,
    config: &Config,
) -> Result<TrackerSession, Box<dyn std::error::Error>> {
    Ok(missiontrack_core::storage::load_session(db, config)?)
}

/// Print the quote of the day.
pub fn quote() -> Result<(), Box<dyn std::error::Error>> {
    let today = chrono::Local::now().date_naive();
    println!("{}", missiontrack_core::quotes::quote_for(today));
    Ok(())
}
