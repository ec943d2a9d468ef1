//! Nearest command implementation.
//!
//! Annotates resources with their latest past and earliest upcoming
//! APPROVED reservation. Resources come either from `--resource` or from
//! everything an owner controls.

use crate::error::CliError;
use crate::output::{resolve_format, write_nearest, FormatArg};
use crate::utils::{load_configuration, now, open_database, GlobalOptions};
use bookit::{resolve_nearest, ActorId, Error, ReservationStore, ResourceId};
use clap::{ArgGroup, Args};

/// Show the nearest approved reservations per resource.
#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true).args(["resource", "owner"])))]
pub struct NearestCommand {
    /// Resources to annotate
    #[arg(long, value_name = "ID", num_args = 1..)]
    pub resource: Vec<i64>,

    /// Annotate every resource owned by this actor
    #[arg(long, value_name = "ID")]
    pub owner: Option<i64>,

    /// Output format (default from configuration)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl NearestCommand {
    /// Execute the nearest command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let now = now();
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let conn = db.connection();

        let resources: Vec<ResourceId> = match self.owner {
            Some(owner) => {
                let owner = ActorId::new(owner);
                if conn.find_actor(owner)?.is_none() {
                    return Err(Error::NotFound {
                        resource: format!("actor {owner}"),
                    }
                    .into());
                }
                conn.find_owned_resource_ids(owner)?
            }
            None => self.resource.iter().copied().map(ResourceId::new).collect(),
        };

        let mut entries: Vec<_> = resolve_nearest(conn, &resources, now)?.into_iter().collect();
        entries.sort_by_key(|(id, _)| *id);

        let format = resolve_format(self.format, config.output_format());
        write_nearest(std::io::stdout().lock(), format, &entries)
    }
}
