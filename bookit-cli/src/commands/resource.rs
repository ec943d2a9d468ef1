//! Resource management commands.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use bookit::{ActorId, Database, Error, ReservationStore};
use clap::{Args, Subcommand};

/// Manage resources.
#[derive(Args)]
pub struct ResourceCommand {
    #[command(subcommand)]
    pub action: ResourceAction,
}

/// Resource subcommands.
#[derive(Subcommand)]
pub enum ResourceAction {
    /// Register a resource for an owner and print its id
    Add {
        /// Owning actor
        #[arg(long, value_name = "ID")]
        owner: i64,

        /// Display name
        #[arg(long)]
        name: String,

        /// Register the resource as not accepting reservations
        #[arg(long)]
        unavailable: bool,
    },
}

impl ResourceCommand {
    /// Execute the resource command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let conn = db.connection();

        match self.action {
            ResourceAction::Add {
                owner,
                name,
                unavailable,
            } => {
                if name.trim().is_empty() {
                    return Err(CliError::InvalidArguments(
                        "Resource name cannot be empty".to_string(),
                    ));
                }
                let owner = ActorId::new(owner);
                if conn.find_actor(owner)?.is_none() {
                    return Err(Error::NotFound {
                        resource: format!("actor {owner}"),
                    }
                    .into());
                }
                let id = Database::insert_resource(conn, owner, &name, !unavailable)?;
                println!("{id}");
            }
        }

        Ok(())
    }
}
