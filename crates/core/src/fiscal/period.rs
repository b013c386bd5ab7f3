//! Calendar-month reporting periods.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A contiguous, inclusive date range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period.
    pub end: NaiveDate,
}

impl ReportPeriod {
    /// Returns the calendar month containing `date`.
    ///
    /// The month holding [`NaiveDate::MAX`] ends on that date.
    #[must_use]
    pub fn month_containing(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2026, 10, 19), date(2026, 10, 1), date(2026, 10, 31))]
    #[case(date(2026, 11, 1), date(2026, 11, 1), date(2026, 11, 30))]
    #[case(date(2026, 2, 14), date(2026, 2, 1), date(2026, 2, 28))]
    #[case(date(2024, 2, 29), date(2024, 2, 1), date(2024, 2, 29))]
    #[case(date(2000, 2, 3), date(2000, 2, 1), date(2000, 2, 29))]
    #[case(date(1900, 2, 3), date(1900, 2, 1), date(1900, 2, 28))]
    #[case(date(2026, 12, 31), date(2026, 12, 1), date(2026, 12, 31))]
    fn test_month_containing(
        #[case] today: NaiveDate,
        #[case] start: NaiveDate,
        #[case] end: NaiveDate,
    ) {
        let period = ReportPeriod::month_containing(today);
        assert_eq!(period.start, start);
        assert_eq!(period.end, end);
    }

    #[test]
    fn test_last_representable_month() {
        let period = ReportPeriod::month_containing(NaiveDate::MAX);

        assert_eq!(period.start, NaiveDate::MAX.with_day(1).unwrap());
        assert_eq!(period.end, NaiveDate::MAX);
    }

    #[test]
    fn test_first_representable_month() {
        let period = ReportPeriod::month_containing(NaiveDate::MIN);

        assert_eq!(period.start, NaiveDate::MIN);
        assert_eq!(period.end.month(), NaiveDate::MIN.month());
        assert_eq!(period.end.succ_opt().unwrap().day(), 1);
    }

    proptest! {
        #[test]
        fn prop_period_is_the_whole_month(days in 0i64..200_000) {
            let day = date(1900, 1, 1) + chrono::TimeDelta::days(days);
            let period = ReportPeriod::month_containing(day);

            prop_assert!(period.start <= day && day <= period.end);
            prop_assert_eq!(period.start.day(), 1);
            prop_assert_eq!(period.start.month(), day.month());
            prop_assert_eq!(period.end.month(), day.month());
            prop_assert_ne!(period.end.succ_opt().unwrap().month(), day.month());
        }
    }
}
