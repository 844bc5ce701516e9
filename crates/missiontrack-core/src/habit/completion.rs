//! Completion evaluation.
//!
//! Pure decision of whether a recorded value satisfies a habit's goal for a
//! date. Absence is never a pass, and malformed input is swallowed here as
//! "not completed" rather than surfaced.

use chrono::NaiveDate;

use super::{GoalValue, Habit};

/// Whether `habit` counts as completed on `date`.
///
/// The value under test is `override_value` when given, otherwise the stored
/// entry for the date. With no resolvable value the answer is `false`.
///
/// Time-of-day units compare earlier-or-equal against the goal; numeric units
/// compare greater-or-equal. Parse failures on either side yield `false`.
pub fn is_completed(habit: &Habit, date: NaiveDate, override_value: Option<&str>) -> bool {
    let raw = match override_value.or_else(|| habit.entry(date)) {
        Some(raw) => raw,
        None => return false,
    };

    let kind = habit.goal_kind();
    match (GoalValue::parse(raw, kind), GoalValue::parse(&habit.goal, kind)) {
        (Some(value), Some(goal)) => value.satisfies(&goal),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn numeric_habit(goal: &str) -> Habit {
        Habit::new("Pushups", goal, "reps")
    }

    fn time_habit(goal: &str) -> Habit {
        Habit::new("Sleep Schedule", goal, "PM")
    }

    #[test]
    fn numeric_value_at_or_above_goal_completes() {
        let habit = numeric_habit("30");
        assert!(is_completed(&habit, date(), Some("35")));
        assert!(is_completed(&habit, date(), Some("30")));
        assert!(!is_completed(&habit, date(), Some("29.9")));
    }

    #[test]
    fn time_value_at_or_before_goal_completes() {
        let habit = time_habit("22:00");
        assert!(is_completed(&habit, date(), Some("21:59")));
        assert!(is_completed(&habit, date(), Some("22:00")));
        assert!(!is_completed(&habit, date(), Some("22:01")));
    }

    #[test]
    fn single_digit_hour_parses() {
        let habit = Habit::new("1 Mile Run", "5:00", "min");
        assert!(is_completed(&habit, date(), Some("4:45")));
        assert!(!is_completed(&habit, date(), Some("5:01")));
    }

    #[test]
    fn absent_entry_is_not_completed() {
        let habit = numeric_habit("30");
        assert!(!is_completed(&habit, date(), None));
    }

    #[test]
    fn stored_entry_is_used_without_override() {
        let mut habit = numeric_habit("30");
        habit.entries.insert(date(), "31".into());
        assert!(is_completed(&habit, date(), None));
        // Override takes precedence over the stored entry.
        assert!(!is_completed(&habit, date(), Some("29")));
    }

    #[test]
    fn malformed_values_never_complete_or_panic() {
        let habit = numeric_habit("30");
        assert!(!is_completed(&habit, date(), Some("")));
        assert!(!is_completed(&habit, date(), Some("thirty")));
        assert!(!is_completed(&habit, date(), Some("30 reps")));

        let habit = time_habit("22:00");
        assert!(!is_completed(&habit, date(), Some("late")));
        assert!(!is_completed(&habit, date(), Some("25:99")));
        assert!(!is_completed(&habit, date(), Some("22")));
    }

    #[test]
    fn malformed_goal_never_completes() {
        let habit = numeric_habit("lots");
        assert!(!is_completed(&habit, date(), Some("100")));
    }

    proptest! {
        /// Numeric completion is exactly the float comparison `value >= goal`.
        #[test]
        fn numeric_completion_law(value in -10_000i32..10_000, goal in -10_000i32..10_000) {
            let value = value as f64 / 10.0;
            let goal = goal as f64 / 10.0;
            let habit = Habit::new("Pushups", goal.to_string(), "reps");
            let completed = is_completed(&habit, date(), Some(&value.to_string()));
            prop_assert_eq!(completed, value >= goal);
        }

        /// Time-of-day completion is exactly earlier-or-equal.
        #[test]
        fn time_completion_law(vh in 0u32..24, vm in 0u32..60, gh in 0u32..24, gm in 0u32..60) {
            let habit = Habit::new("Sleep Schedule", format!("{gh:02}:{gm:02}"), "PM");
            let completed = is_completed(&habit, date(), Some(&format!("{vh:02}:{vm:02}")));
            prop_assert_eq!(completed, (vh, vm) <= (gh, gm));
        }
    }
}
