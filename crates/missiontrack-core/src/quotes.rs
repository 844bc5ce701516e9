//! Daily motivational quotes.
//!
//! One quote per reference date, picked with a PCG seeded from the date so
//! the quote is stable within a day and rotates across days.

use chrono::{Datelike, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

pub const QUOTES: [&str; 7] = [
    "Education is the most powerful weapon which you can use to change the world. - Nelson Mandela",
    "The best way to predict your future is to create it. - Abraham Lincoln",
    "Hard work beats talent when talent doesn't work hard. - Tim Notke",
    "Dream big and dare to fail. - Norman Vaughan",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "Success is the sum of small efforts, repeated day in and day out. - Robert Collier",
    "Perseverance is not a long race; it's many short races one after the other. - Walter Elliot",
];

/// The quote for a given date.
pub fn quote_for(date: NaiveDate) -> &'static str {
    let mut rng = Pcg64::seed_from_u64(date.num_days_from_ce() as u64);
    QUOTES[rng.gen_range(0..QUOTES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_is_stable_for_a_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(quote_for(date), quote_for(date));
    }

    #[test]
    fn quotes_rotate_across_dates() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let distinct: std::collections::BTreeSet<_> =
            start.iter_days().take(30).map(quote_for).collect();
        assert!(distinct.len() > 1, "a month should see more than one quote");
    }
}
