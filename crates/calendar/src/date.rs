//! Local wall-clock date value with millisecond precision.

use std::fmt;

use chrono::{
    DateTime, Datelike, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    TimeZone, Timelike,
};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::CalendarError;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub(crate) const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// A calendar instant in the host's local time, stored as wall-clock fields.
///
/// `DateValue` is `Copy`: every operation receives its own copy and returns a
/// new value, so a caller's date is never modified by a derivation.
///
/// Months are 0-based (January = 0) and weekdays are Sunday-first
/// (Sunday = 0), matching the indices of [`months`](crate::months) and
/// [`week_days`](crate::week_days).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue(NaiveDateTime);

impl DateValue {
    /// Returns the current instant in local time, truncated to milliseconds.
    pub fn now() -> Self {
        Self::from(Local::now().naive_local())
    }

    /// Builds a date from calendar fields, normalising any overflow.
    ///
    /// Fields may be out of their usual range and roll into the neighbouring
    /// unit: month 12 is January of the following year, day 0 is the last day
    /// of the previous month, hour 24 is midnight of the next day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the normalised date cannot be
    /// represented.
    pub fn from_fields(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
    ) -> Result<Self, CalendarError> {
        let year = year
            .checked_add(month.div_euclid(12))
            .ok_or(CalendarError::OutOfRange { year })?;
        let out_of_range = || {
            debug!(year, "rejected date outside the representable range");
            CalendarError::OutOfRange { year }
        };
        let first = first_of_month(year, month.rem_euclid(12)).ok_or_else(out_of_range)?;
        let value = wall_clock_millis(day, hour, minute, second, millisecond)
            .and_then(TimeDelta::try_milliseconds)
            .and_then(|offset| first.and_time(NaiveTime::MIN).checked_add_signed(offset))
            .ok_or_else(out_of_range)?;
        Ok(Self(value))
    }

    /// Builds a date at midnight from a year, 0-based month and day of month.
    ///
    /// Overflowing months and days are normalised as in [`DateValue::from_fields`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the normalised date cannot be
    /// represented.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        Self::from_fields(year.into(), month.into(), day.into(), 0, 0, 0, 0)
    }

    /// Builds a date from milliseconds since the Unix epoch, viewed in local time.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTimestamp`] if the timestamp is outside
    /// the representable range.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, CalendarError> {
        let utc = DateTime::from_timestamp_millis(millis)
            .ok_or(CalendarError::InvalidTimestamp { millis })?;
        Ok(Self::from(utc.with_timezone(&Local)))
    }

    /// Returns the full year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (0..=11).
    pub fn month(self) -> u32 {
        self.0.month0()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week (0 = Sunday ..= 6 = Saturday).
    pub fn weekday(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u32 {
        self.0.second()
    }

    /// Returns the millisecond (0..=999).
    pub fn millisecond(self) -> u32 {
        self.0.nanosecond() / 1_000_000
    }

    /// Returns the wall-clock fields as a chrono value.
    pub fn naive(self) -> NaiveDateTime {
        self.0
    }

    /// Returns milliseconds since the Unix epoch, resolving the wall-clock
    /// fields in the host's local time zone.
    ///
    /// Ambiguous times (a repeated hour) resolve to the earlier instant.
    pub fn epoch_millis(self) -> i64 {
        match Local.from_local_datetime(&self.0) {
            LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => t.timestamp_millis(),
            // Skipped by a forward transition: apply the offset in force at that instant.
            LocalResult::None => {
                let offset = Local.offset_from_utc_datetime(&self.0).local_minus_utc();
                self.0.and_utc().timestamp_millis() - i64::from(offset) * MS_PER_SECOND
            }
        }
    }

    /// Moves the date by whole days, keeping the time of day.
    pub(crate) fn shift_days(self, days: i64) -> Self {
        let shifted = TimeDelta::try_days(days).and_then(|d| self.0.checked_add_signed(d));
        saturate(shifted, days)
    }

    /// Moves the date by milliseconds.
    pub(crate) fn shift_millis(self, millis: i64) -> Self {
        let shifted =
            TimeDelta::try_milliseconds(millis).and_then(|d| self.0.checked_add_signed(d));
        saturate(shifted, millis)
    }

    /// Moves the date by calendar months, keeping day of month and time.
    ///
    /// A day of month the target month lacks overflows into the month after.
    pub(crate) fn add_months(self, months: i64) -> Self {
        let total = i64::from(self.year()) * 12 + i64::from(self.month()) + months;
        match first_of_month(total.div_euclid(12), total.rem_euclid(12)) {
            Some(first) => {
                Self(first.and_time(self.0.time())).shift_days(i64::from(self.day()) - 1)
            }
            None => saturate(None, months),
        }
    }

    /// Same calendar day at 00:00:00.000.
    pub(crate) fn start_of_day(self) -> Self {
        Self(self.0.date().and_time(NaiveTime::MIN))
    }
}

/// Resolves an optional date argument, defaulting to the current instant.
pub(crate) fn or_now(date: impl Into<Option<DateValue>>) -> DateValue {
    date.into().unwrap_or_else(DateValue::now)
}

fn first_of_month(year: i64, month0: i64) -> Option<NaiveDate> {
    let year = i32::try_from(year).ok()?;
    let month = u32::try_from(month0).ok()? + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn wall_clock_millis(day: i64, hour: i64, minute: i64, second: i64, ms: i64) -> Option<i64> {
    day.checked_sub(1)?
        .checked_mul(MS_PER_DAY)?
        .checked_add(hour.checked_mul(MS_PER_HOUR)?)?
        .checked_add(minute.checked_mul(MS_PER_MINUTE)?)?
        .checked_add(second.checked_mul(MS_PER_SECOND)?)?
        .checked_add(ms)
}

/// Clamps a failed shift to the representable bound in the direction of travel.
fn saturate(shifted: Option<NaiveDateTime>, direction: i64) -> DateValue {
    match shifted {
        Some(value) => DateValue(value),
        None if direction < 0 => DateValue::from(NaiveDateTime::MIN),
        None => DateValue::from(NaiveDateTime::MAX),
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(value: NaiveDateTime) -> Self {
        // A leap second carries nanos >= 1e9; clamp it into the last millisecond.
        let nanos = value.nanosecond().min(999_999_999) / 1_000_000 * 1_000_000;
        Self(value.with_nanosecond(nanos).unwrap_or(value))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateValue {
    fn from(value: DateTime<Tz>) -> Self {
        Self::from(value.with_timezone(&Local).naive_local())
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
