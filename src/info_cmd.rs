//! Info command: derived dates, week number and predicates for one date.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use fdate_calendar::{DateValue, is_this_month, is_this_year, is_today};

use crate::cli::InfoArgs;

/// Everything the library derives from a single date.
#[derive(Debug, Serialize)]
struct DateInfo {
    date: DateValue,
    week_start: DateValue,
    month_start: DateValue,
    month_end: DateValue,
    next_month: DateValue,
    week_number: u32,
    days_in_month: u32,
    is_this_year: bool,
    is_this_month: bool,
    is_today: bool,
}

impl DateInfo {
    fn new(date: DateValue) -> Self {
        Self {
            date,
            week_start: date.week_start(),
            month_start: date.month_start(),
            month_end: date.month_end(),
            next_month: date.next_month(),
            week_number: date.week_number(),
            days_in_month: date.days_in_month(),
            is_this_year: is_this_year(date),
            is_this_month: is_this_month(date),
            is_today: is_today(date),
        }
    }
}

/// Run the info command.
pub fn run(args: InfoArgs) -> Result<()> {
    let _cmd = info_span!("info").entered();
    let report = DateInfo::new(args.date.unwrap_or_else(DateValue::now));
    info!(date = %report.date, "describing date");

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize date info")?;
        println!("{json}");
        return Ok(());
    }

    println!("date           {}", report.date);
    println!("week start     {}", report.week_start);
    println!("month start    {}", report.month_start);
    println!("month end      {}", report.month_end);
    println!("next month     {}", report.next_month);
    println!("week number    {}", report.week_number);
    println!("days in month  {}", report.days_in_month);
    println!("this year      {}", report.is_this_year);
    println!("this month     {}", report.is_this_month);
    println!("today          {}", report.is_today);
    Ok(())
}
