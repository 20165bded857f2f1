use chrono::{Datelike, NaiveDate};
use fdate_calendar::{DateValue, month_end, month_start, next_month, week_number, week_start};

/// Every day of the given years, at a fixed afternoon time.
fn every_day(years: std::ops::RangeInclusive<i32>) -> Vec<DateValue> {
    let mut dates = Vec::new();
    for year in years {
        let mut date = DateValue::from_fields(year.into(), 0, 1, 15, 42, 7, 300).unwrap();
        while date.year() == year {
            dates.push(date);
            date = DateValue::from_fields(
                date.year().into(),
                date.month().into(),
                i64::from(date.day()) + 1,
                15,
                42,
                7,
                300,
            )
            .unwrap();
        }
    }
    dates
}

/// Days in the month of `date`, counted independently with chrono.
fn days_in_month(date: DateValue) -> u32 {
    let (year, month) = (date.year(), date.month() + 1);
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    (next - first).num_days() as u32
}

#[test]
fn week_start_is_preceding_sunday() {
    for date in every_day(1999..=2025) {
        let start = week_start(date);
        assert_eq!(start.weekday(), 0, "week_start({date}) = {start}");
        assert!(start <= date, "week_start({date}) = {start} is after the date");
        let gap = date.naive() - start.naive();
        assert!(gap.num_days() < 7, "week_start({date}) = {start} is a week early");
        assert_eq!(
            (start.hour(), start.minute(), start.second(), start.millisecond()),
            (15, 42, 7, 300),
            "week_start({date}) lost its time of day"
        );
    }
}

#[test]
fn month_start_first_day_at_midnight() {
    for date in every_day(1999..=2025) {
        let start = month_start(date);
        assert_eq!(start.day(), 1, "month_start({date}) = {start}");
        assert_eq!((start.year(), start.month()), (date.year(), date.month()));
        assert_eq!(
            (start.hour(), start.minute(), start.second(), start.millisecond()),
            (0, 0, 0, 0),
            "month_start({date}) = {start}"
        );
        assert_eq!(month_start(start), start, "month_start is not idempotent for {date}");
    }
}

#[test]
fn month_end_is_one_month_after_start_less_a_millisecond() {
    for date in every_day(1999..=2025) {
        let start = month_start(date);
        let end = month_end(date);
        let following = DateValue::from_ymd(start.year(), start.month() + 1, 1).unwrap();
        assert_eq!(
            (following.naive() - end.naive()).num_milliseconds(),
            1,
            "month_end({date}) = {end}"
        );
        assert_eq!(end.day(), days_in_month(date), "month_end({date}) = {end}");
        assert_eq!(date.days_in_month(), days_in_month(date));
        assert_eq!(
            (end.hour(), end.minute(), end.second(), end.millisecond()),
            (23, 59, 59, 999)
        );
    }
}

#[test]
fn next_month_uses_calendar_overflow() {
    let cases: &[((i32, u32, u32), (i32, u32, u32))] = &[
        ((2023, 0, 31), (2023, 2, 3)),   // Jan 31 -> "Feb 31" -> Mar 3
        ((2024, 0, 31), (2024, 2, 2)),   // leap year -> Mar 2
        ((2023, 0, 28), (2023, 1, 28)),  // no overflow
        ((2023, 4, 31), (2023, 6, 1)),   // May 31 -> "Jun 31" -> Jul 1
        ((2023, 11, 31), (2024, 0, 31)), // year rollover
    ];
    for &((y, m, d), (ey, em, ed)) in cases {
        let date = DateValue::from_ymd(y, m, d).unwrap();
        let expected = DateValue::from_ymd(ey, em, ed).unwrap();
        assert_eq!(next_month(date), expected, "next_month({date})");
    }
}

#[test]
fn next_month_keeps_time_of_day() {
    let date = DateValue::from_fields(2023, 2, 10, 8, 15, 0, 0).unwrap();
    let next = next_month(date);
    assert_eq!((next.month(), next.day()), (3, 10));
    assert_eq!((next.hour(), next.minute()), (8, 15));
}

#[test]
fn week_number_agrees_with_iso_weeks() {
    for date in every_day(1990..=2030) {
        let expected = date.naive().iso_week().week();
        assert_eq!(week_number(date), expected, "week_number({date})");
    }
}

#[test]
fn caller_date_unchanged() {
    let date = DateValue::from_fields(2023, 6, 19, 10, 0, 0, 0).unwrap();
    let copy = date;
    let _ = week_start(date);
    let _ = month_end(date);
    let _ = next_month(date);
    let _ = week_number(date);
    assert_eq!(date, copy);
}
