//! `resconf` binary entry point.
use anyhow::Result;
use clap::Parser;

use resconf_cli::cli::{Cli, Command};
use resconf_cli::commands;
use resconf_cli::logging::{self, Logger};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();

    let command = match args.command {
        Command::Reconcile(_) => "reconcile",
        Command::Check(_) => "check",
        Command::Version => {
            commands::version::run();
            return Ok(());
        }
    };
    logging::init_subscriber(args.verbose, command);
    let log = Logger::new(command);
    log.debug(&format!("resconf {}", commands::version::version()));

    match args.command {
        Command::Reconcile(opts) => commands::reconcile::run(&args.global, &opts, &log),
        Command::Check(opts) => commands::check::run(&args.global, &opts, &log),
        Command::Version => Ok(()),
    }
}
