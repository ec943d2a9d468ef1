//! Show command implementation.

use crate::error::CliError;
use crate::output::{resolve_format, write_reservations, FormatArg};
use crate::utils::{load_configuration, open_database, GlobalOptions};
use bookit::{view_reservation, ActorId, ReservationId};
use clap::Args;

/// Show one reservation to its requester or the resource owner.
#[derive(Args)]
pub struct ShowCommand {
    /// Reservation to show
    #[arg(long, value_name = "ID")]
    pub reservation: i64,

    /// Acting requester or owner
    #[arg(long, value_name = "ID")]
    pub actor: i64,

    /// Output format (default from configuration)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let reservation = view_reservation(
            db.connection(),
            ReservationId::new(self.reservation),
            ActorId::new(self.actor),
        )?;

        let format = resolve_format(self.format, config.output_format());
        write_reservations(std::io::stdout().lock(), format, &[reservation])
    }
}
