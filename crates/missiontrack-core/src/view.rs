//! View modes and date-range selection.
//!
//! A view mode plus a reference date produce the ordered list of ISO dates the
//! aggregator runs over: the day itself, the Monday-start week containing it,
//! or the full calendar month.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
    Month,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            other => Err(format!("unknown view mode: {other} (day, week, month)")),
        }
    }
}

/// Ordered date keys for `mode` around `reference`.
///
/// Week ranges start on Monday; a Sunday reference belongs to the week that
/// started the prior Monday. Month ranges run from the 1st through the last
/// day of the reference month.
pub fn date_range(reference: NaiveDate, mode: ViewMode) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Day => vec![reference],
        ViewMode::Week => {
            let monday =
                reference - Duration::days(reference.weekday().num_days_from_monday() as i64);
            monday.iter_days().take(7).collect()
        }
        ViewMode::Month => {
            let first = reference.with_day(1).unwrap_or(reference);
            first
                .iter_days()
                .take_while(|d| d.month() == reference.month())
                .collect()
        }
    }
}

/// Step the reference date by `direction` view-sized units.
///
/// Month steps clamp the day when the target month is shorter.
pub fn navigate(reference: NaiveDate, mode: ViewMode, direction: i32) -> NaiveDate {
    match mode {
        ViewMode::Day => reference + Duration::days(direction as i64),
        ViewMode::Week => reference + Duration::days(7 * direction as i64),
        ViewMode::Month => {
            let months = Months::new(direction.unsigned_abs());
            let stepped = if direction >= 0 {
                reference.checked_add_months(months)
            } else {
                reference.checked_sub_months(months)
            };
            stepped.unwrap_or(reference)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_range_is_single_date() {
        assert_eq!(
            date_range(ymd(2024, 1, 10), ViewMode::Day),
            vec![ymd(2024, 1, 10)]
        );
    }

    #[test]
    fn week_of_wednesday_starts_prior_monday() {
        let range = date_range(ymd(2024, 1, 10), ViewMode::Week);
        assert_eq!(range.len(), 7);
        assert_eq!(range[0], ymd(2024, 1, 8));
        assert_eq!(range[6], ymd(2024, 1, 14));
    }

    #[test]
    fn sunday_belongs_to_prior_mondays_week() {
        let range = date_range(ymd(2024, 1, 14), ViewMode::Week);
        assert_eq!(range[0], ymd(2024, 1, 8));
        assert_eq!(range[6], ymd(2024, 1, 14));
    }

    #[test]
    fn monday_starts_its_own_week() {
        let range = date_range(ymd(2024, 1, 8), ViewMode::Week);
        assert_eq!(range[0], ymd(2024, 1, 8));
    }

    #[test]
    fn month_range_covers_whole_calendar_month() {
        let feb_leap = date_range(ymd(2024, 2, 15), ViewMode::Month);
        assert_eq!(feb_leap.len(), 29);
        assert_eq!(feb_leap[0], ymd(2024, 2, 1));
        assert_eq!(feb_leap[28], ymd(2024, 2, 29));

        let feb = date_range(ymd(2023, 2, 15), ViewMode::Month);
        assert_eq!(feb.len(), 28);

        let dec = date_range(ymd(2024, 12, 1), ViewMode::Month);
        assert_eq!(dec.len(), 31);
        assert_eq!(dec[30], ymd(2024, 12, 31));
    }

    #[test]
    fn navigate_steps_by_view_size() {
        assert_eq!(
            navigate(ymd(2024, 1, 10), ViewMode::Day, 1),
            ymd(2024, 1, 11)
        );
        assert_eq!(
            navigate(ymd(2024, 1, 10), ViewMode::Week, -1),
            ymd(2024, 1, 3)
        );
        assert_eq!(
            navigate(ymd(2024, 1, 10), ViewMode::Month, 1),
            ymd(2024, 2, 10)
        );
    }

    #[test]
    fn navigate_month_clamps_short_months() {
        assert_eq!(
            navigate(ymd(2024, 1, 31), ViewMode::Month, 1),
            ymd(2024, 2, 29)
        );
        assert_eq!(
            navigate(ymd(2024, 3, 31), ViewMode::Month, -1),
            ymd(2024, 2, 29)
        );
    }

    #[test]
    fn view_mode_parses_and_displays() {
        assert_eq!("week".parse::<ViewMode>().unwrap(), ViewMode::Week);
        assert_eq!("Month".parse::<ViewMode>().unwrap(), ViewMode::Month);
        assert!("fortnight".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::Day.to_string(), "day");
    }
}
