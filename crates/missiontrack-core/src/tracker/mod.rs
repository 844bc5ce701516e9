//! Tracker session state machine.
//!
//! Owns the habit list and the gamification level. Commands mutate state and
//! return the events the change produced; dispatching those events is the
//! caller's concern (see [`crate::notify`]).

use chrono::{NaiveDate, Utc};

use crate::error::ValidationError;
use crate::events::Event;
use crate::habit::{default_habits, is_completed, overall_progress, Habit};

/// An owned tracking session: the habit list plus the session level.
///
/// There is no hidden global -- every evaluator and aggregator call runs
/// against the state held here.
#[derive(Debug, Clone)]
pub struct TrackerSession {
    habits: Vec<Habit>,
    level: u32,
}

impl TrackerSession {
    /// Build a session from loaded state. Level is floored at 1.
    pub fn new(habits: Vec<Habit>, level: u32) -> Self {
        Self {
            habits,
            level: level.max(1),
        }
    }

    /// A fresh session seeded with the default habit list.
    pub fn with_defaults() -> Self {
        Self::new(default_habits(), 1)
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn habit(&self, name: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.name == name)
    }

    pub fn habit_index(&self, name: &str) -> Option<usize> {
        self.habits.iter().position(|h| h.name == name)
    }

    /// Record `value` for one habit on one date and apply the streak and
    /// level transitions.
    ///
    /// The streak rule looks only at the edited date: a transition into
    /// completed increments the streak (emitting a milestone at positive
    /// multiples of 7), a transition out of completed resets it to 0, and
    /// a write with no transition leaves it untouched. Editing a past date
    /// out of order can therefore leave the counter out of step with the
    /// habit's true consecutive-day history.
    ///
    /// The level is recomputed from overall progress across `range` after
    /// every write and only ever increases.
    pub fn record_entry(
        &mut self,
        habit_index: usize,
        date: NaiveDate,
        value: &str,
        range: &[NaiveDate],
    ) -> Result<Vec<Event>, ValidationError> {
        let len = self.habits.len();
        let habit = self
            .habits
            .get_mut(habit_index)
            .ok_or(ValidationError::OutOfBounds {
                index: habit_index,
                len,
            })?;

        let prev = habit.entries.insert(date, value.to_string());
        let was_completed = match prev.as_deref() {
            Some(prev) => is_completed(habit, date, Some(prev)),
            None => false,
        };
        let now_completed = is_completed(habit, date, Some(value));

        let mut events = vec![Event::EntryRecorded {
            habit: habit.name.clone(),
            date,
            value: value.to_string(),
            completed: now_completed,
            at: Utc::now(),
        }];

        if now_completed && !was_completed {
            habit.streak += 1;
            if habit.streak % 7 == 0 {
                events.push(Event::StreakMilestone {
                    habit: habit.name.clone(),
                    streak: habit.streak,
                    at: Utc::now(),
                });
            }
        } else if !now_completed && was_completed {
            habit.streak = 0;
        }

        if let Some(event) = self.update_level(range) {
            events.push(event);
        }
        Ok(events)
    }

    /// Append a habit after validating it and checking name uniqueness.
    pub fn add_habit(&mut self, habit: Habit) -> Result<Vec<Event>, ValidationError> {
        habit.validate()?;
        if self.habit(&habit.name).is_some() {
            return Err(ValidationError::DuplicateName(habit.name));
        }
        let name = habit.name.clone();
        self.habits.push(habit);
        Ok(vec![Event::HabitAdded {
            habit: name,
            at: Utc::now(),
        }])
    }

    /// Remove a habit by name. The list is replaced wholesale; nothing else
    /// about the remaining habits changes.
    pub fn remove_habit(&mut self, name: &str) -> Result<(), ValidationError> {
        if self.habit(name).is_none() {
            return Err(ValidationError::UnknownHabit(name.to_string()));
        }
        self.habits.retain(|h| h.name != name);
        Ok(())
    }

    /// Replace the whole habit list (backend pull, whole-list deletion).
    pub fn replace_habits(&mut self, habits: Vec<Habit>) {
        self.habits = habits;
    }

    /// Mean completion percentage across all habits over `range`.
    pub fn overall_progress(&self, range: &[NaiveDate]) -> f64 {
        overall_progress(&self.habits, range)
    }

    /// Explicit external reset of the level. The only way it goes down.
    pub fn reset_level(&mut self) {
        self.level = 1;
    }

    /// Build a full state snapshot event over `range`.
    pub fn snapshot(&self, range: &[NaiveDate]) -> Event {
        Event::StateSnapshot {
            level: self.level,
            overall_pct: self.overall_progress(range),
            habit_count: self.habits.len(),
            at: Utc::now(),
        }
    }

    fn update_level(&mut self, range: &[NaiveDate]) -> Option<Event> {
        let new_level = (self.overall_progress(range) / 10.0).floor() as u32 + 1;
        if new_level > self.level {
            self.level = new_level;
            return Some(Event::LevelUp {
                level: new_level,
                at: Utc::now(),
            });
        }
        None
    }
}

impl Default for TrackerSession {
    fn default() -> Self {
        Self::with_defaults()
    }
}
