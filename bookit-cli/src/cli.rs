//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ActorCommand, ApproveCommand, CancelCommand, EligibleCommand, ListCommand, NearestCommand,
    ReserveCommand, ResourceCommand, ShowCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line front end for the bookit reservation engine.
#[derive(Parser)]
#[command(name = "bookit")]
#[command(version, about = "Share items through owner-approved reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "BOOKIT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "BOOKIT_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "BOOKIT_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Manage actors
    Actor(ActorCommand),

    /// Manage resources
    Resource(ResourceCommand),

    /// Request a reservation on a resource
    Reserve(ReserveCommand),

    /// Approve or reject a waiting reservation (owner only)
    Approve(ApproveCommand),

    /// Cancel a waiting reservation (requester only)
    Cancel(CancelCommand),

    /// Show a single reservation
    Show(ShowCommand),

    /// List reservations by bucket with pagination
    List(ListCommand),

    /// Show the nearest past and upcoming approved reservation per resource
    Nearest(NearestCommand),

    /// Check whether an actor has completed a reservation on a resource
    Eligible(EligibleCommand),
}
