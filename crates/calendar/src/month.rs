//! Week and month boundaries.

use crate::date::{DateValue, or_now};

impl DateValue {
    /// Returns the Sunday at or before this date, keeping the time of day.
    pub fn week_start(self) -> Self {
        self.shift_days(-i64::from(self.weekday()))
    }

    /// Returns midnight on the 1st of this date's month.
    pub fn month_start(self) -> Self {
        self.start_of_day().shift_days(1 - i64::from(self.day()))
    }

    /// Returns the last millisecond of this date's month (23:59:59.999 on
    /// its last day).
    pub fn month_end(self) -> Self {
        self.month_start().add_months(1).shift_millis(-1)
    }

    /// Returns the same day of month and time one month later.
    ///
    /// A day the next month lacks rolls over: January 31 becomes March 3 in
    /// a common year and March 2 in a leap year.
    pub fn next_month(self) -> Self {
        self.add_months(1)
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(self) -> u32 {
        self.month_end().day()
    }
}

/// Returns the Sunday starting the week of `date` (default: now).
pub fn week_start(date: impl Into<Option<DateValue>>) -> DateValue {
    or_now(date).week_start()
}

/// Returns the start of the month containing `date` (default: now).
pub fn month_start(date: impl Into<Option<DateValue>>) -> DateValue {
    or_now(date).month_start()
}

/// Returns the last millisecond of the month containing `date` (default: now).
pub fn month_end(date: impl Into<Option<DateValue>>) -> DateValue {
    or_now(date).month_end()
}

/// Returns `date` (default: now) moved one calendar month forward.
pub fn next_month(date: impl Into<Option<DateValue>>) -> DateValue {
    or_now(date).next_month()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> DateValue {
        DateValue::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn week_start_mid_week() {
        // Wednesday 2023-03-15 -> Sunday 2023-03-12
        assert_eq!(ymd(2023, 2, 15).week_start(), ymd(2023, 2, 12));
    }

    #[test]
    fn week_start_on_sunday_is_identity() {
        let sunday = ymd(2023, 0, 15);
        assert_eq!(sunday.week_start(), sunday);
    }

    #[test]
    fn week_start_crosses_year() {
        // Monday 2024-01-01 -> Sunday 2023-12-31
        assert_eq!(ymd(2024, 0, 1).week_start(), ymd(2023, 11, 31));
    }

    #[test]
    fn week_start_keeps_time() {
        let date = DateValue::from_fields(2023, 2, 15, 14, 30, 5, 7).unwrap();
        let start = date.week_start();
        assert_eq!(start.day(), 12);
        assert_eq!(
            (start.hour(), start.minute(), start.second(), start.millisecond()),
            (14, 30, 5, 7)
        );
    }

    #[test]
    fn month_start_zeroes_time() {
        let date = DateValue::from_fields(2023, 6, 19, 23, 59, 59, 999).unwrap();
        let start = date.month_start();
        assert_eq!(start, ymd(2023, 6, 1));
    }

    #[test]
    fn month_end_last_millisecond() {
        let end = ymd(2023, 1, 10).month_end();
        assert_eq!(end, DateValue::from_fields(2023, 1, 28, 23, 59, 59, 999).unwrap());
        assert_eq!(ymd(2024, 1, 10).month_end().day(), 29);
        assert_eq!(ymd(2023, 11, 31).month_end().year(), 2023);
    }

    #[test]
    fn days_in_month_values() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, &days) in expected.iter().enumerate() {
            assert_eq!(
                ymd(2023, month as u32, 1).days_in_month(),
                days,
                "month {month}"
            );
        }
        assert_eq!(ymd(2000, 1, 1).days_in_month(), 29);
        assert_eq!(ymd(1900, 1, 1).days_in_month(), 28);
    }

    #[test]
    fn next_month_simple() {
        assert_eq!(ymd(2023, 4, 15).next_month(), ymd(2023, 5, 15));
        assert_eq!(ymd(2023, 11, 15).next_month(), ymd(2024, 0, 15));
    }

    #[test]
    fn next_month_overflow() {
        assert_eq!(ymd(2023, 0, 31).next_month(), ymd(2023, 2, 3));
        assert_eq!(ymd(2024, 0, 31).next_month(), ymd(2024, 2, 2));
        assert_eq!(ymd(2023, 2, 31).next_month(), ymd(2023, 4, 1));
    }

    #[test]
    fn free_functions_accept_value() {
        let date = ymd(2023, 2, 15);
        assert_eq!(week_start(date), date.week_start());
        assert_eq!(month_start(date), date.month_start());
        assert_eq!(month_end(date), date.month_end());
        assert_eq!(next_month(date), date.next_month());
    }

    #[test]
    fn free_functions_default_to_now() {
        let start = month_start(None);
        assert_eq!(start.day(), 1);
        assert_eq!(week_start(None).weekday(), 0);
    }
}
