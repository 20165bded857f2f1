use clap::{Parser, Subcommand};

use fdate_calendar::DateValue;

use crate::convert;

/// fdate calendar and formatting tool.
#[derive(Parser)]
#[command(
    name = "fdate",
    version,
    about = "Calendar arithmetic and token-based date formatting"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render a date with a token pattern.
    Format(FormatArgs),
    /// Print the calendar page for a month.
    Calendar(CalendarArgs),
    /// Print derived dates, week number and predicates for a date.
    Info(InfoArgs),
    /// List or look up month and weekday names.
    Names(NamesArgs),
}

/// Arguments for the `format` subcommand.
#[derive(clap::Args)]
pub struct FormatArgs {
    /// Pattern to expand. Tokens: Y j m d W F g A i; anything else is copied.
    #[arg(default_value = "Y-m-d")]
    pub pattern: String,

    /// Date to use instead of now: YYYY-MM-DD with optional HH:MM[:SS], month 1-12.
    #[arg(short, long, value_parser = convert::parse_date)]
    pub date: Option<DateValue>,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Any date in the month to show (default: now).
    #[arg(short, long, value_parser = convert::parse_date)]
    pub date: Option<DateValue>,

    /// Prefix each row with its week number.
    #[arg(short, long)]
    pub week_numbers: bool,

    /// Add rows until every day of the month is shown.
    #[arg(short, long)]
    pub full: bool,

    /// Emit the month grid as JSON instead of a text page.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` subcommand.
#[derive(clap::Args)]
pub struct InfoArgs {
    /// Date to describe (default: now).
    #[arg(short, long, value_parser = convert::parse_date)]
    pub date: Option<DateValue>,

    /// Emit the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `names` subcommand.
#[derive(clap::Args)]
pub struct NamesArgs {
    /// Which name table to read.
    #[command(subcommand)]
    pub table: NameTable,
}

/// Name tables.
#[derive(Subcommand)]
pub enum NameTable {
    /// Month names, January = 0. A non-numeric index reads as 0.
    Months {
        /// 0-based index to look up; lists the whole table when omitted.
        index: Option<String>,
    },
    /// Weekday names, Sunday = 0.
    Days {
        /// 0-based index to look up; lists the whole table when omitted.
        index: Option<String>,
    },
}
