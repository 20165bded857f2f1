//! Pure conversion functions: command-line arguments -> library types.

use anyhow::{Context, Result, bail};

use fdate_calendar::DateValue;

/// Decodes a `--date` argument into a [`DateValue`].
///
/// Accepts `YYYY-MM-DD`, optionally followed by a space or `T` and
/// `HH:MM` or `HH:MM:SS`. The month is 1-based here and converted to the
/// library's 0-based month. A leading `-` marks a year before year 0.
pub fn parse_date(s: &str) -> Result<DateValue> {
    let s = s.trim();
    let (date_part, time_part) = match s.split_once([' ', 'T']) {
        Some((date, time)) => (date, Some(time.trim())),
        None => (s, None),
    };

    let (sign, unsigned) = match date_part.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, date_part),
    };
    let [year, month, day] = numbers::<3>(unsigned, '-')
        .with_context(|| format!("expected YYYY-MM-DD, got {date_part:?}"))?;
    let year = sign * year;

    if !(1..=12).contains(&month) {
        bail!("invalid month: {month} (must be 1..=12)");
    }
    let month = month - 1;
    let first = DateValue::from_fields(year, month, 1, 0, 0, 0, 0)
        .with_context(|| format!("date {date_part:?} is out of range"))?;
    let max_day = i64::from(first.days_in_month());
    if !(1..=max_day).contains(&day) {
        bail!("invalid day: {day} for month {} (max {max_day})", month + 1);
    }

    let (hour, minute, second) = match time_part {
        None => (0, 0, 0),
        Some(time) => parse_time(time)?,
    };

    DateValue::from_fields(year, month, day, hour, minute, second, 0)
        .with_context(|| format!("date {s:?} is out of range"))
}

fn parse_time(time: &str) -> Result<(i64, i64, i64)> {
    let (hour, minute, second) = match numbers::<3>(time, ':') {
        Some([h, m, s]) => (h, m, s),
        None => {
            let [h, m] = numbers::<2>(time, ':')
                .with_context(|| format!("expected HH:MM or HH:MM:SS, got {time:?}"))?;
            (h, m, 0)
        }
    };
    if !(0..24).contains(&hour) || !(0..60).contains(&minute) || !(0..60).contains(&second) {
        bail!("invalid time of day: {time:?}");
    }
    Ok((hour, minute, second))
}

/// Splits `s` on `sep` into exactly `N` unsigned integers.
fn numbers<const N: usize>(s: &str, sep: char) -> Option<[i64; N]> {
    let mut out = [0; N];
    let mut parts = s.split(sep);
    for slot in &mut out {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = part.parse().ok()?;
    }
    parts.next().is_none().then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_only() {
        let date = parse_date("2023-01-15").unwrap();
        assert_eq!(date, DateValue::from_ymd(2023, 0, 15).unwrap());
    }

    #[test]
    fn date_with_time() {
        let date = parse_date("2023-01-15 09:05").unwrap();
        assert_eq!((date.hour(), date.minute(), date.second()), (9, 5, 0));
        let date = parse_date("2023-01-15T21:30:45").unwrap();
        assert_eq!((date.hour(), date.minute(), date.second()), (21, 30, 45));
    }

    #[test]
    fn negative_year() {
        let date = parse_date("-0044-03-15").unwrap();
        assert_eq!(date.year(), -44);
        assert_eq!(date.month(), 2);
    }

    #[test]
    fn rejects_bad_month_and_day() {
        assert!(parse_date("2023-13-01").is_err());
        assert!(parse_date("2023-00-01").is_err());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2024-02-29").is_ok());
    }

    #[test]
    fn rejects_malformed() {
        assert!(parse_date("").is_err());
        assert!(parse_date("2023/01/15").is_err());
        assert!(parse_date("2023-01-15-01").is_err());
        assert!(parse_date("2023-01-15 25:00").is_err());
        assert!(parse_date("2023-01-15 9").is_err());
        assert!(parse_date("2023-+1-15").is_err());
    }
}
