//! Thursday-anchored week numbering.

use chrono::Datelike;

use crate::date::{DateValue, MS_PER_DAY, or_now};

impl DateValue {
    /// Returns the week-of-year number of this date.
    ///
    /// The date is moved to the Thursday of its Monday-to-Sunday week
    /// (Sunday counts as day 7), and the week number is
    /// `ceil((days since Jan 1 of that Thursday's year + 1) / 7)`.
    pub fn week_number(self) -> u32 {
        let date = self.start_of_day();
        let iso_day = match date.weekday() {
            0 => 7,
            d => i64::from(d),
        };
        let thursday = date.shift_days(4 - iso_day);
        let year_start = thursday.shift_days(-i64::from(thursday.naive().ordinal0()));
        // 0..=365, so the result is 1..=53
        let elapsed_days =
            ((thursday.naive() - year_start.naive()).num_milliseconds() / MS_PER_DAY) as u32;
        (elapsed_days + 1).div_ceil(7)
    }
}

/// Returns the week-of-year number of `date` (default: now).
pub fn week_number(date: impl Into<Option<DateValue>>) -> u32 {
    or_now(date).week_number()
}
