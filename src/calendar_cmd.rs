//! Calendar command: print a month grid as a text page or JSON.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use fdate_calendar::{DateValue, MonthGrid, Week, format, week_days};

use crate::cli::CalendarArgs;

/// Run the calendar command.
pub fn run(args: CalendarArgs) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let date = args.date.unwrap_or_else(DateValue::now);
    let grid = if args.full {
        MonthGrid::spanning_month(date)
    } else {
        MonthGrid::for_month(date)
    };
    info!(month = %format(date, "F Y"), n_weeks = grid.len(), full = args.full, "built month grid");

    if args.json {
        let json = serde_json::to_string_pretty(&grid).context("failed to serialize month grid")?;
        println!("{json}");
    } else {
        print!("{}", render(date, &grid, args.week_numbers));
    }
    Ok(())
}

/// Renders a month grid as a fixed-width calendar page.
fn render(date: DateValue, grid: &MonthGrid, week_numbers: bool) -> String {
    let gutter = if week_numbers { "   " } else { "" };
    let mut out = String::new();

    let title = format(date, "F Y");
    out.push_str(&format!("{gutter}{title:^20}\n"));

    let header: Vec<&str> = week_days().iter().map(|d| &d[..2]).collect();
    out.push_str(&format!("{gutter}{}\n", header.join(" ")));

    for week in grid.weeks() {
        if week_numbers {
            match first_day(week) {
                Some(day) => out.push_str(&format!("{:>2} ", day.week_number())),
                None => out.push_str(gutter),
            }
        }
        let cells: Vec<String> = week
            .iter()
            .map(|slot| match slot {
                Some(day) => format!("{:>2}", day.day()),
                None => "  ".to_string(),
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out
}

fn first_day(week: &Week) -> Option<DateValue> {
    week.iter().flatten().next().copied()
}
