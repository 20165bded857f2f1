//! English month and weekday name tables.

/// Month names, January first.
pub(crate) const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names, Sunday first.
pub(crate) const WEEK_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Returns all twelve month names, January first.
pub fn months() -> [&'static str; 12] {
    MONTHS
}

/// Returns the name of the month at a 0-based index, or `None` past December.
pub fn month_name(index: usize) -> Option<&'static str> {
    MONTHS.get(index).copied()
}

/// Looks up a month name from a textual index.
///
/// Input that is not an integer falls back to index 0, so `"x"` yields
/// `"January"`. Integers outside the table yield `None`.
pub fn month_name_from_str(index: &str) -> Option<&'static str> {
    match index.trim().parse::<i64>() {
        Ok(n) => usize::try_from(n).ok().and_then(month_name),
        Err(_) => month_name(0),
    }
}

/// Returns all seven weekday names, Sunday first.
pub fn week_days() -> [&'static str; 7] {
    WEEK_DAYS
}

/// Returns the name of the weekday at a 0-based index (Sunday = 0).
pub fn day_name(index: usize) -> Option<&'static str> {
    WEEK_DAYS.get(index).copied()
}

/// Looks up a weekday name from a textual index.
///
/// Unlike [`month_name_from_str`], input that is not an integer is not
/// defaulted and yields `None`.
pub fn day_name_from_str(index: &str) -> Option<&'static str> {
    let n = index.trim().parse::<usize>().ok()?;
    day_name(n)
}
