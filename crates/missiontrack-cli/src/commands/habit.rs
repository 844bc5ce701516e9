//! Habit management commands.

use clap::Subcommand;
use missiontrack_core::{Config, Database, Habit};

#[derive(Subcommand)]
pub enum HabitAction {
    /// List habits with goals and streaks
    List,
    /// Full detail for one habit
    Show {
        /// Habit name
        name: String,
    },
    /// Add a new habit
    Add {
        /// Habit name (unique)
        name: String,
        /// Goal value ("30" or "22:00")
        goal: String,
        /// Unit; "min", "AM" and "PM" mean clock-time goals
        unit: String,
        /// Subdivide the goal into display segments
        #[arg(long)]
        chunks: Option<u32>,
    },
    /// Remove a habit
    Remove {
        /// Habit name
        name: String,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut session = super::load_session(&db, &config)?;

    match action {
        HabitAction::List => {
            let rows: Vec<_> = session
                .habits()
                .iter()
                .map(|h| {
                    serde_json::json!({
                        "name": h.name,
                        "goal": h.goal,
                        "unit": h.unit,
                        "streak": h.streak,
                        "entries": h.entries.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        HabitAction::Show { name } => {
            let habit = session
                .habit(&name)
                .ok_or_else(|| format!("unknown habit: {name}"))?;
            println!("{}", serde_json::to_string_pretty(habit)?);
        }
        HabitAction::Add {
            name,
            goal,
            unit,
            chunks,
        } => {
            let mut habit = Habit::new(name, goal, unit);
            if let Some(chunks) = chunks {
                habit = habit.with_chunks(chunks);
            }
            let id = habit.id.clone();
            session.add_habit(habit)?;
            db.save_session(&session)?;
            println!("Habit added: {id}");
        }
        HabitAction::Remove { name } => {
            session.remove_habit(&name)?;
            db.save_session(&session)?;
            println!("Habit removed: {name}");
        }
    }
    Ok(())
}
