//! Format command: render a date with a token pattern.

use anyhow::Result;
use tracing::{debug, info_span};

use fdate_calendar::{DateValue, format};

use crate::cli::FormatArgs;

/// Run the format command.
pub fn run(args: FormatArgs) -> Result<()> {
    let _cmd = info_span!("format").entered();
    let date = args.date.unwrap_or_else(DateValue::now);
    debug!(%date, pattern = %args.pattern, "formatting");
    println!("{}", format(date, &args.pattern));
    Ok(())
}
