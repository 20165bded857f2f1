//! Token-based date formatting.
//!
//! A pattern is scanned one character at a time. Characters that are
//! [`FormatToken`] keys are replaced by the matching piece of the date and
//! everything else is copied through. There is no escape syntax: a token
//! character can never be emitted literally.

use std::borrow::Cow;
use std::fmt::Write;

use tracing::trace;

use crate::date::{DateValue, or_now};
use crate::names::MONTHS;

/// A single-character format code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatToken {
    /// `Y`: full year.
    Year,
    /// `j`: month number 1-12, unpadded.
    Month,
    /// `m`: month number 01-12.
    MonthPadded,
    /// `d`: day of month 01-31.
    DayPadded,
    /// `W`: week-of-year number, unpadded.
    WeekNumber,
    /// `F`: full English month name.
    MonthName,
    /// `g`: hour modulo 12 (0-11), unpadded.
    Hour12,
    /// `A`: `AM` or `PM`.
    Meridiem,
    /// `i`: minutes 00-59.
    MinutePadded,
}

impl FormatToken {
    /// Every token, in table order.
    pub const ALL: [FormatToken; 9] = [
        FormatToken::Year,
        FormatToken::Month,
        FormatToken::MonthPadded,
        FormatToken::DayPadded,
        FormatToken::WeekNumber,
        FormatToken::MonthName,
        FormatToken::Hour12,
        FormatToken::Meridiem,
        FormatToken::MinutePadded,
    ];

    /// Returns the token for a pattern character, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'Y' => Some(Self::Year),
            'j' => Some(Self::Month),
            'm' => Some(Self::MonthPadded),
            'd' => Some(Self::DayPadded),
            'W' => Some(Self::WeekNumber),
            'F' => Some(Self::MonthName),
            'g' => Some(Self::Hour12),
            'A' => Some(Self::Meridiem),
            'i' => Some(Self::MinutePadded),
            _ => None,
        }
    }

    /// Returns the pattern character for this token.
    pub fn key(self) -> char {
        match self {
            Self::Year => 'Y',
            Self::Month => 'j',
            Self::MonthPadded => 'm',
            Self::DayPadded => 'd',
            Self::WeekNumber => 'W',
            Self::MonthName => 'F',
            Self::Hour12 => 'g',
            Self::Meridiem => 'A',
            Self::MinutePadded => 'i',
        }
    }

    /// Renders this token's piece of `date`.
    pub fn render(self, date: DateValue) -> String {
        let mut out = String::new();
        self.write_to(&mut out, date);
        out
    }

    fn write_to(self, out: &mut String, date: DateValue) {
        // Writing to a String cannot fail.
        let _ = match self {
            Self::Year => write!(out, "{}", date.year()),
            Self::Month => write!(out, "{}", date.month() + 1),
            Self::MonthPadded => write!(out, "{:02}", date.month() + 1),
            Self::DayPadded => write!(out, "{:02}", date.day()),
            Self::WeekNumber => write!(out, "{}", date.week_number()),
            Self::MonthName => write!(out, "{}", MONTHS[date.month() as usize]),
            Self::Hour12 => write!(out, "{}", date.hour() % 12),
            Self::Meridiem => write!(out, "{}", if date.hour() < 12 { "AM" } else { "PM" }),
            Self::MinutePadded => write!(out, "{:02}", date.minute()),
        };
    }
}

/// Returns the token table.
pub fn formats() -> &'static [FormatToken] {
    &FormatToken::ALL
}

/// A format argument: either a pattern to expand or a plain value to echo.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern<'a> {
    /// A pattern scanned for tokens.
    Text(Cow<'a, str>),
    /// A non-textual argument, returned as its string form.
    Value(String),
}

impl<'a> From<&'a str> for Pattern<'a> {
    fn from(text: &'a str) -> Self {
        Pattern::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Pattern<'a> {
    fn from(text: &'a String) -> Self {
        Pattern::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Pattern<'_> {
    fn from(text: String) -> Self {
        Pattern::Text(Cow::Owned(text))
    }
}

macro_rules! value_pattern {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Pattern<'_> {
                fn from(value: $t) -> Self {
                    Pattern::Value(value.to_string())
                }
            }
        )*
    };
}

value_pattern!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64, bool);

impl DateValue {
    /// Expands every token in `pattern` against this date.
    pub fn format(self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len() * 2);
        let mut literals = 0usize;
        for c in pattern.chars() {
            match FormatToken::from_char(c) {
                Some(token) => token.write_to(&mut out, self),
                None => {
                    out.push(c);
                    literals += 1;
                }
            }
        }
        trace!(pattern, literals, "formatted date");
        out
    }
}

/// Formats `date` (default: now) with `pattern`.
///
/// A [`Pattern::Value`] is returned unchanged without reading the date.
pub fn format<'a>(date: impl Into<Option<DateValue>>, pattern: impl Into<Pattern<'a>>) -> String {
    match pattern.into() {
        Pattern::Text(text) => or_now(date).format(&text),
        Pattern::Value(value) => value,
    }
}
