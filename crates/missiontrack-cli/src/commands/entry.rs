//! Entry recording commands.
//!
//! Recording updates the in-memory session first, logs the update to the
//! local history, saves the session, and only then dispatches notifications.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use missiontrack_core::{
    date_range, notify, Config, ConsoleNotifier, Database, Event, TrackerSession, ViewMode,
};

#[derive(Subcommand)]
pub enum EntryAction {
    /// Record a value for a habit
    Set {
        /// Habit name
        habit: String,
        /// Recorded value ("35", "21:30", ...)
        value: String,
        /// Date to record for (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// View the level recomputation runs over (defaults to config)
        #[arg(long)]
        view: Option<ViewMode>,
    },
    /// Clear a habit's entry for a date
    Clear {
        /// Habit name
        habit: String,
        /// Date to clear (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List all recorded entries for a habit
    List {
        /// Habit name
        habit: String,
    },
}

pub fn run(action: EntryAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut session = super::load_session(&db, &config)?;

    match action {
        EntryAction::Set {
            habit,
            value,
            date,
            view,
        } => record(&db, &config, &mut session, &habit, &value, date, view),
        EntryAction::Clear { habit, date } => {
            record(&db, &config, &mut session, &habit, "", date, None)
        }
        EntryAction::List { habit } => {
            let habit = session
                .habit(&habit)
                .ok_or_else(|| format!("unknown habit: {habit}"))?;
            println!("{}", serde_json::to_string_pretty(&habit.entries)?);
            Ok(())
        }
    }
}

fn record(
    db: &Database,
    config: &Config,
    session: &mut TrackerSession,
    name: &str,
    value: &str,
    date: Option<NaiveDate>,
    view: Option<ViewMode>,
) -> Result<(), Box<dyn std::error::Error>> {
    let index = session
        .habit_index(name)
        .ok_or_else(|| format!("unknown habit: {name}"))?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let view = view.unwrap_or(config.view.default_mode);
    let range = date_range(date, view);

    let events = session.record_entry(index, date, value, &range)?;
    for event in &events {
        if let Event::EntryRecorded {
            habit,
            date,
            value,
            completed,
            ..
        } = event
        {
            db.record_entry_update(habit, *date, value, *completed)?;
        }
    }
    db.save_session(session)?;

    let wanted: Vec<Event> = events
        .iter()
        .filter(|e| notification_enabled(config, e))
        .cloned()
        .collect();
    notify::dispatch(&ConsoleNotifier, &wanted);

    println!("{}", serde_json::to_string_pretty(&events)?);
    Ok(())
}

fn notification_enabled(config: &Config, event: &Event) -> bool {
    if !config.notifications.enabled {
        return false;
    }
    match event {
        Event::StreakMilestone { .. } => config.notifications.streak_milestones,
        Event::LevelUp { .. } => config.notifications.level_ups,
        _ => false,
    }
}
