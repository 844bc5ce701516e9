use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Every state change in the tracker produces an Event.
/// Transitions return events; the notifier seam dispatches them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// An entry value was written for a habit on a date.
    EntryRecorded {
        habit: String,
        date: NaiveDate,
        value: String,
        completed: bool,
        at: DateTime<Utc>,
    },
    /// Streak reached a positive multiple of 7.
    StreakMilestone {
        habit: String,
        streak: u32,
        at: DateTime<Utc>,
    },
    /// Overall progress pushed the level past its previous value.
    LevelUp {
        level: u32,
        at: DateTime<Utc>,
    },
    /// A habit was appended to the list.
    HabitAdded {
        habit: String,
        at: DateTime<Utc>,
    },
    /// Full-state snapshot over a date range.
    StateSnapshot {
        level: u32,
        overall_pct: f64,
        habit_count: usize,
        at: DateTime<Utc>,
    },
}
