//! List command implementation.
//!
//! This module implements the `list` command, which displays one page of
//! an actor's reservations in a bucket, as requester or as owner.

use crate::error::CliError;
use crate::output::{resolve_format, write_reservations, FormatArg};
use crate::utils::{load_configuration, now, open_database, GlobalOptions};
use bookit::{list_reservations, ActorId, ListOptions, Role};
use clap::Args;

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Actor whose reservations to list
    #[arg(long, value_name = "ID")]
    pub actor: i64,

    /// List reservations on resources the actor owns instead of ones they made
    #[arg(long)]
    pub owner: bool,

    /// Bucket: ALL, CURRENT, PAST, FUTURE, WAITING, REJECTED or CANCELED
    #[arg(long, value_name = "STATE", default_value = "ALL")]
    pub state: String,

    /// Requested offset (snapped down to a page boundary)
    #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    pub from: i64,

    /// Page size (default from configuration)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Output format (default from configuration)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let now = now();

        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Open database
        let db = open_database(global, &config)?;

        // 3. Query one page
        let role = if self.owner {
            Role::Owner
        } else {
            Role::Requester
        };
        let size = self
            .size
            .unwrap_or_else(|| i64::from(config.default_page_size()));
        let options = ListOptions::new(ActorId::new(self.actor))
            .with_role(role)
            .with_state(self.state)
            .with_page(self.from, size);
        let reservations = list_reservations(db.connection(), &options, now)?;

        log::debug!("listed {} reservation(s)", reservations.len());

        // 4. Format and output to stdout
        let format = resolve_format(self.format, config.output_format());
        write_reservations(std::io::stdout().lock(), format, &reservations)
    }
}
