//! Progress reporting commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use missiontrack_core::{
    chunk_fill, date_range, habit_progress, quotes, Config, Database, ViewMode,
};

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Progress report over the selected view
    Show {
        /// View mode (defaults to config)
        #[arg(long)]
        view: Option<ViewMode>,
        /// Reference date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Current level
    Level,
    /// Reset the level back to 1
    ResetLevel,
    /// Recent entry updates
    History {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

pub fn run(action: ProgressAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut session = super::load_session(&db, &config)?;

    match action {
        ProgressAction::Show { view, date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let view = view.unwrap_or(config.view.default_mode);
            let range = date_range(date, view);

            let habits: Vec<_> = session
                .habits()
                .iter()
                .map(|h| {
                    let fill = chunk_fill(h, date);
                    serde_json::json!({
                        "name": h.name,
                        "goal": h.goal,
                        "unit": h.unit,
                        "streak": h.streak,
                        "entry": h.entry(date),
                        "progress_pct": habit_progress(h, &range),
                        "chunks": { "filled": fill.filled, "total": fill.total },
                    })
                })
                .collect();

            let report = serde_json::json!({
                "view": view.to_string(),
                "date": date,
                "range": { "from": range.first(), "to": range.last() },
                "habits": habits,
                "overall_pct": session.overall_progress(&range),
                "level": session.level(),
                "quote": quotes::quote_for(date),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        ProgressAction::Level => {
            println!("{}", session.level());
        }
        ProgressAction::ResetLevel => {
            session.reset_level();
            db.save_session(&session)?;
            println!("level reset to 1");
        }
        ProgressAction::History { limit } => {
            let history = db.recent_history(limit)?;
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
    }
    Ok(())
}
