//! Progress aggregation over date ranges.

use chrono::NaiveDate;

use super::{completion::is_completed, GoalKind, GoalValue, Habit};

/// Completion percentage for one habit over a date range, in `[0, 100]`.
///
/// An empty range is a caller error; it yields `0.0` rather than dividing
/// by zero.
pub fn habit_progress(habit: &Habit, range: &[NaiveDate]) -> f64 {
    if range.is_empty() {
        return 0.0;
    }
    let completed = range
        .iter()
        .filter(|date| is_completed(habit, **date, None))
        .count();
    completed as f64 / range.len() as f64 * 100.0
}

/// Arithmetic mean of [`habit_progress`] over all habits, in `[0, 100]`.
///
/// An empty habit list is a caller error; it yields `0.0`.
pub fn overall_progress(habits: &[Habit], range: &[NaiveDate]) -> f64 {
    if habits.is_empty() {
        return 0.0;
    }
    let total: f64 = habits
        .iter()
        .map(|habit| habit_progress(habit, range))
        .sum();
    total / habits.len() as f64
}

/// Partial-progress display state for a chunked habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkFill {
    pub filled: u32,
    pub total: u32,
}

/// How many of a habit's display segments the entry for `date` fills.
///
/// `total` is the habit's chunk count (1 for an undivided goal); each segment
/// is worth `goal / total`. Missing or malformed entries fill nothing, as do
/// non-numeric goals -- chunking has no meaning for clock-time targets.
pub fn chunk_fill(habit: &Habit, date: NaiveDate) -> ChunkFill {
    let total = habit.chunks.unwrap_or(1).max(1);
    let empty = ChunkFill { filled: 0, total };

    let goal = match GoalValue::parse(&habit.goal, GoalKind::Numeric) {
        Some(GoalValue::Numeric(goal)) if goal > 0.0 => goal,
        _ => return empty,
    };
    let entry = match habit.entry(date).and_then(|raw| GoalValue::parse(raw, GoalKind::Numeric)) {
        Some(GoalValue::Numeric(entry)) if entry >= 0.0 => entry,
        _ => return empty,
    };

    let per_chunk = goal / total as f64;
    let filled = (entry / per_chunk).floor() as u32;
    ChunkFill {
        filled: filled.min(total),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn week() -> Vec<NaiveDate> {
        (8..=14).map(day).collect()
    }

    #[test]
    fn three_of_seven_days_is_three_hundred_sevenths() {
        let mut habit = Habit::new("Pushups", "30", "reps");
        habit.entries.insert(day(8), "30".into());
        habit.entries.insert(day(10), "45".into());
        habit.entries.insert(day(12), "31".into());
        habit.entries.insert(day(13), "10".into()); // below goal

        let pct = habit_progress(&habit, &week());
        assert!((pct - 300.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn empty_range_is_guarded() {
        let habit = Habit::new("Pushups", "30", "reps");
        assert_eq!(habit_progress(&habit, &[]), 0.0);
    }

    #[test]
    fn overall_is_mean_across_habits() {
        let mut done = Habit::new("Pushups", "30", "reps");
        for d in 8..=14 {
            done.entries.insert(day(d), "30".into());
        }
        let untouched = Habit::new("Reading Books", "20", "pages");

        let overall = overall_progress(&[done, untouched], &week());
        assert!((overall - 50.0).abs() < 1e-9);
    }

    #[test]
    fn overall_empty_list_is_guarded() {
        assert_eq!(overall_progress(&[], &week()), 0.0);
    }

    #[test]
    fn chunk_fill_scales_entry_against_goal() {
        let mut habit = Habit::new("Water Intake", "5", "liters").with_chunks(5);
        habit.entries.insert(day(8), "3".into());
        assert_eq!(chunk_fill(&habit, day(8)), ChunkFill { filled: 3, total: 5 });

        habit.entries.insert(day(9), "2.5".into());
        assert_eq!(chunk_fill(&habit, day(9)), ChunkFill { filled: 2, total: 5 });

        // Overshooting the goal clamps to the segment count.
        habit.entries.insert(day(10), "9".into());
        assert_eq!(chunk_fill(&habit, day(10)), ChunkFill { filled: 5, total: 5 });
    }

    #[test]
    fn chunk_fill_handles_missing_and_undivided() {
        let habit = Habit::new("Water Intake", "5", "liters").with_chunks(5);
        assert_eq!(chunk_fill(&habit, day(8)), ChunkFill { filled: 0, total: 5 });

        let mut plain = Habit::new("Pushups", "30", "reps");
        plain.entries.insert(day(8), "30".into());
        assert_eq!(chunk_fill(&plain, day(8)), ChunkFill { filled: 1, total: 1 });
    }

    #[test]
    fn chunk_fill_ignores_time_goals() {
        let mut habit = Habit::new("Sleep Schedule", "22:00", "PM").with_chunks(4);
        habit.entries.insert(day(8), "21:00".into());
        assert_eq!(chunk_fill(&habit, day(8)), ChunkFill { filled: 0, total: 4 });
    }
}
