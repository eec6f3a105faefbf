//! Calendar-date helpers for observation time series.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Ordering of an observation-date series.
///
/// Both orderings occur in deployed dashboards (the environmental charts were
/// fed newest-first in one build and chronologically in another), so the
/// ordering is an explicit knob rather than an assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// Most recent date first.
    NewestFirst,
    /// Chronological, oldest date first.
    OldestFirst,
}

/// Generate `days` consecutive calendar dates ending at `today`.
///
/// `DateOrder::OldestFirst` yields `[today - days + 1, ..., today]`;
/// `DateOrder::NewestFirst` yields the reverse.
pub fn observation_dates(today: NaiveDate, days: usize, order: DateOrder) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = (0..days as i64)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect();
    if order == DateOrder::NewestFirst {
        dates.reverse();
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_oldest_first_ends_at_today() {
        let dates = observation_dates(day(30), 5, DateOrder::OldestFirst);
        assert_eq!(dates, vec![day(26), day(27), day(28), day(29), day(30)]);
    }

    #[test]
    fn test_newest_first_starts_at_today() {
        let dates = observation_dates(day(30), 5, DateOrder::NewestFirst);
        assert_eq!(dates, vec![day(30), day(29), day(28), day(27), day(26)]);
    }

    #[test]
    fn test_dates_are_consecutive() {
        let dates = observation_dates(day(15), 30, DateOrder::OldestFirst);
        assert_eq!(dates.len(), 30);
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_crosses_month_boundary() {
        let dates = observation_dates(
            NaiveDate::from_ymd_opt(2024, 7, 2).unwrap(),
            4,
            DateOrder::OldestFirst,
        );
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 6, 29).unwrap());
        assert_eq!(dates[3], NaiveDate::from_ymd_opt(2024, 7, 2).unwrap());
    }
}
