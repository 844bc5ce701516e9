//! Habit domain model.
//!
//! A habit tracks one recurring behavior against a goal. The goal is kept as
//! the raw string the user entered -- `"30"` for a numeric target, `"22:00"`
//! for a clock-time target -- and its interpretation is decided by the unit:
//! the units `min`, `AM` and `PM` mean time-of-day, everything else is numeric.

pub mod completion;
pub mod progress;

pub use completion::is_completed;
pub use progress::{chunk_fill, habit_progress, overall_progress, ChunkFill};

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// How a habit's goal and entry values are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    /// Values are `HH:MM` clock times; earlier-or-equal satisfies the goal.
    TimeOfDay,
    /// Values are floats; greater-or-equal satisfies the goal.
    Numeric,
}

/// A goal or entry value parsed under a [`GoalKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GoalValue {
    TimeOfDay(NaiveTime),
    Numeric(f64),
}

impl GoalValue {
    /// Parse a raw value string under the given kind.
    ///
    /// Returns `None` on any malformed input -- callers treat that as
    /// "not completed", never as an error.
    pub fn parse(raw: &str, kind: GoalKind) -> Option<Self> {
        match kind {
            GoalKind::TimeOfDay => NaiveTime::parse_from_str(raw.trim(), "%H:%M")
                .ok()
                .map(GoalValue::TimeOfDay),
            GoalKind::Numeric => f64::from_str(raw.trim()).ok().map(GoalValue::Numeric),
        }
    }

    /// Whether this value satisfies `goal` under the shared comparison rule.
    ///
    /// Time-of-day: value at or before the goal passes ("in bed by 22:00",
    /// "run finished within 5:00"). Numeric: value at or above the goal passes.
    /// Mismatched kinds never pass.
    pub fn satisfies(&self, goal: &GoalValue) -> bool {
        match (self, goal) {
            (GoalValue::TimeOfDay(value), GoalValue::TimeOfDay(goal)) => value <= goal,
            (GoalValue::Numeric(value), GoalValue::Numeric(goal)) => value >= goal,
            _ => false,
        }
    }
}

/// One tracked behavior with a goal, a unit, and per-date entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub goal: String,
    pub unit: String,
    /// One recorded value per ISO date. Keys serialize as `YYYY-MM-DD`.
    #[serde(default)]
    pub entries: BTreeMap<NaiveDate, String>,
    /// Consecutive qualifying days, mutated only by the tracker session.
    #[serde(default)]
    pub streak: u32,
    /// Optional subdivision of the goal into display segments.
    /// Absence means an undivided goal, not zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<u32>,
}

impl Habit {
    /// Create a habit with a fresh id and no entries.
    pub fn new(name: impl Into<String>, goal: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            goal: goal.into(),
            unit: unit.into(),
            entries: BTreeMap::new(),
            streak: 0,
            chunks: None,
        }
    }

    /// Subdivide the goal into `chunks` display segments.
    pub fn with_chunks(mut self, chunks: u32) -> Self {
        self.chunks = Some(chunks);
        self
    }

    /// How this habit's goal and entries are interpreted.
    pub fn goal_kind(&self) -> GoalKind {
        match self.unit.as_str() {
            "min" | "AM" | "PM" => GoalKind::TimeOfDay,
            _ => GoalKind::Numeric,
        }
    }

    /// The entry recorded for `date`, if any.
    pub fn entry(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    /// Check structural invariants: non-empty name, a goal that parses under
    /// the unit's kind, and a positive chunk count when present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "name".into(),
                message: "must not be empty".into(),
            });
        }
        if GoalValue::parse(&self.goal, self.goal_kind()).is_none() {
            return Err(ValidationError::InvalidValue {
                field: "goal".into(),
                message: format!("'{}' does not parse for unit '{}'", self.goal, self.unit),
            });
        }
        if let Some(chunks) = self.chunks {
            if chunks == 0 {
                return Err(ValidationError::InvalidValue {
                    field: "chunks".into(),
                    message: "must be at least 1".into(),
                });
            }
        }
        Ok(())
    }
}

/// The seeded default habit list.
pub fn default_habits() -> Vec<Habit> {
    vec![
        Habit::new("Study Time", "6", "hours"),
        Habit::new("Business Activities", "1", "activity"),
        Habit::new("1 Mile Run", "5:00", "min"),
        Habit::new("Pushups", "30", "reps"),
        Habit::new("Memorize Quran Ayas", "1", "ayah"),
        Habit::new("Daily Prayers", "5", "prayers"),
        Habit::new("Reading Books", "20", "pages"),
        Habit::new("Post Reels", "1", "reel"),
        Habit::new("LinkedIn Posts", "1", "post"),
        Habit::new("App Development", "1", "task"),
        Habit::new("Team Meeting", "1", "meeting"),
        Habit::new("Water Intake", "5", "liters").with_chunks(5),
        Habit::new("Podcast Creation", "1", "podcast"),
        Habit::new("Call Grandparents", "1", "call"),
        Habit::new("Sleep Schedule", "22:00", "PM"),
        Habit::new("Protein Intake", "180", "grams"),
    ]
}
