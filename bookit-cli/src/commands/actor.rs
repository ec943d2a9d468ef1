//! Actor management commands.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use bookit::Database;
use clap::{Args, Subcommand};

/// Manage actors.
#[derive(Args)]
pub struct ActorCommand {
    #[command(subcommand)]
    pub action: ActorAction,
}

/// Actor subcommands.
#[derive(Subcommand)]
pub enum ActorAction {
    /// Register a new actor and print its id
    Add {
        /// Display name
        #[arg(long)]
        name: String,
    },
}

impl ActorCommand {
    /// Execute the actor command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        match self.action {
            ActorAction::Add { name } => {
                if name.trim().is_empty() {
                    return Err(CliError::InvalidArguments(
                        "Actor name cannot be empty".to_string(),
                    ));
                }
                let id = Database::insert_actor(db.connection(), &name)?;
                println!("{id}");
            }
        }

        Ok(())
    }
}
