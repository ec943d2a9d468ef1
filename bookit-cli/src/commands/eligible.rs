//! Command to check whether an actor has completed a reservation on a
//! resource, which is what gates post-use feedback.

use crate::error::CliError;
use crate::utils::{load_configuration, now, open_database, GlobalOptions};
use bookit::{has_completed_reservation, ActorId, ResourceId};
use clap::Args;

/// Check for a completed (approved and ended) reservation.
#[derive(Args)]
pub struct EligibleCommand {
    /// Requester to check
    #[arg(long, value_name = "ID")]
    pub actor: i64,

    /// Resource to check
    #[arg(long, value_name = "ID")]
    pub resource: i64,
}

impl EligibleCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let now = now();
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let actor = ActorId::new(self.actor);
        let resource = ResourceId::new(self.resource);
        if has_completed_reservation(db.connection(), actor, resource, now)? {
            if !global.quiet {
                println!("eligible");
            }
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "Actor {actor} has no completed reservation on resource {resource}"
            )))
        }
    }
}
