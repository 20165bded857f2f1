//! Comparisons against the current date.

use crate::date::{DateValue, or_now};

impl DateValue {
    /// Returns `true` if both dates fall in the same year.
    pub fn is_same_year(self, other: DateValue) -> bool {
        self.year() == other.year()
    }

    /// Returns `true` if both dates fall in the same month of the same year.
    pub fn is_same_month(self, other: DateValue) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Returns `true` if both dates fall on the same calendar day.
    pub fn is_same_day(self, other: DateValue) -> bool {
        self.day() == other.day() && self.is_same_month(other) && self.is_same_year(other)
    }
}

/// Returns `true` if `date` (default: now) is in the current year.
pub fn is_this_year(date: impl Into<Option<DateValue>>) -> bool {
    or_now(date).is_same_year(DateValue::now())
}

/// Returns `true` if `date` (default: now) is in the current month.
pub fn is_this_month(date: impl Into<Option<DateValue>>) -> bool {
    or_now(date).is_same_month(DateValue::now())
}

/// Returns `true` if `date` (default: now) is today.
pub fn is_today(date: impl Into<Option<DateValue>>) -> bool {
    let date = or_now(date);
    date.day() == DateValue::now().day() && is_this_month(date) && is_this_year(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> DateValue {
        DateValue::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn same_year() {
        assert!(ymd(2023, 0, 1).is_same_year(ymd(2023, 11, 31)));
        assert!(!ymd(2023, 11, 31).is_same_year(ymd(2024, 0, 1)));
    }

    #[test]
    fn same_month_needs_same_year() {
        assert!(ymd(2023, 4, 1).is_same_month(ymd(2023, 4, 31)));
        assert!(!ymd(2023, 4, 1).is_same_month(ymd(2022, 4, 1)));
    }

    #[test]
    fn same_day_of_month_in_other_month() {
        assert!(!ymd(2023, 4, 10).is_same_day(ymd(2023, 5, 10)));
        let evening = DateValue::from_fields(2023, 4, 10, 18, 0, 0, 0).unwrap();
        assert!(ymd(2023, 4, 10).is_same_day(evening));
    }

    #[test]
    fn now_is_today() {
        assert!(is_today(DateValue::now()));
        assert!(is_today(None));
        assert!(is_this_month(None));
        assert!(is_this_year(None));
    }

    #[test]
    fn long_ago_is_not_today() {
        let old = ymd(2000, 0, 1);
        assert!(!is_today(old));
        assert!(!is_this_month(old));
        assert!(!is_this_year(old));
    }
}
