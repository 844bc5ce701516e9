//! Remote backend synchronization.
//!
//! Pull replaces the local habit list with the backend's canonical copy;
//! push saves every local habit, one call per habit. Local state is always
//! authoritative -- a failed push changes nothing in memory or on disk.

use clap::Subcommand;
use missiontrack_core::{Config, Database, RemoteBackend};

#[derive(Subcommand)]
pub enum SyncAction {
    /// Replace local habits with the backend's canonical list
    Pull,
    /// Save every local habit to the backend
    Push,
    /// Show backend configuration status
    Status,
}

pub fn run(action: SyncAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    match action {
        SyncAction::Status => show_status(&config),
        SyncAction::Pull => pull(&config),
        SyncAction::Push => push(&config),
    }
}

fn show_status(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if config.backend.enabled && !config.backend.base_url.trim().is_empty() {
        println!("backend: {}", config.backend.base_url);
        println!(
            "token: {}",
            if config.backend.api_token.is_some() {
                "configured"
            } else {
                "none"
            }
        );
    } else {
        println!("backend: not configured");
        println!("Set backend.enabled and backend.base_url with 'missiontrack-cli config set'.");
    }
    Ok(())
}

fn pull(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let backend = RemoteBackend::from_config(&config.backend)?;
    let db = Database::open()?;
    let mut session = super::load_session(&db, config)?;

    let rt = tokio::runtime::Runtime::new()?;
    let habits = rt.block_on(backend.fetch_habits())?;
    println!("Pulled {} habits from {}", habits.len(), backend.base_url());

    session.replace_habits(habits);
    db.save_session(&session)?;
    Ok(())
}

fn push(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let backend = RemoteBackend::from_config(&config.backend)?;
    let db = Database::open()?;
    let session = super::load_session(&db, config)?;

    let rt = tokio::runtime::Runtime::new()?;
    let outcome = rt.block_on(backend.save_all(session.habits()));
    println!("Pushed {} habits ({} failed)", outcome.saved, outcome.failed);
    Ok(())
}
