//! Names command: list or look up month and weekday names.

use anyhow::{Result, bail};
use tracing::info_span;

use fdate_calendar::{day_name_from_str, month_name_from_str, months, week_days};

use crate::cli::{NameTable, NamesArgs};

/// Run the names command.
pub fn run(args: NamesArgs) -> Result<()> {
    let _cmd = info_span!("names").entered();
    match args.table {
        NameTable::Months { index: None } => print_table(&months()),
        NameTable::Days { index: None } => print_table(&week_days()),
        NameTable::Months { index: Some(index) } => match month_name_from_str(&index) {
            Some(name) => println!("{name}"),
            None => bail!("no month name at index {index:?}"),
        },
        NameTable::Days { index: Some(index) } => match day_name_from_str(&index) {
            Some(name) => println!("{name}"),
            None => bail!("no weekday name at index {index:?}"),
        },
    }
    Ok(())
}

fn print_table(names: &[&str]) {
    for (i, name) in names.iter().enumerate() {
        println!("{i:>2}  {name}");
    }
}
