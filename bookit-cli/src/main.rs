//! Main entry point for the bookit CLI.
//!
//! This is the command-line interface for the bookit reservation engine.
//! It provides commands for the reservation lifecycle:
//! - `reserve`: Request a reservation
//! - `approve` / `cancel`: Decide on or withdraw a waiting reservation
//! - `show` / `list`: Read reservations
//! - `nearest`: Nearest approved reservations per resource

mod cli;
mod commands;
mod error;
mod output;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = bookit::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Actor(cmd) => cmd.execute(&global),
        cli::Command::Resource(cmd) => cmd.execute(&global),
        cli::Command::Reserve(cmd) => cmd.execute(&global),
        cli::Command::Approve(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Nearest(cmd) => cmd.execute(&global),
        cli::Command::Eligible(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
