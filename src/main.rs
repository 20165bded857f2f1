mod calendar_cmd;
mod cli;
mod convert;
mod format_cmd;
mod info_cmd;
mod logging;
mod names_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Format(args) => format_cmd::run(args),
        Command::Calendar(args) => calendar_cmd::run(args),
        Command::Info(args) => info_cmd::run(args),
        Command::Names(args) => names_cmd::run(args),
    }
}
