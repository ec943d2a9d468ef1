//! Cancel command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_dry_run, GlobalOptions};
use bookit::operations::CancelPlan;
use bookit::{cancel_reservation, ActorId, CancelOptions, PlanExecutor, ReservationId};
use clap::Args;

/// Cancel a waiting reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation to cancel
    #[arg(long, value_name = "ID")]
    pub reservation: i64,

    /// Acting requester
    #[arg(long, value_name = "ID")]
    pub actor: i64,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let options =
            CancelOptions::new(ReservationId::new(self.reservation), ActorId::new(self.actor));

        if self.dry_run {
            let plan = CancelPlan::new(options).build_plan(db.connection())?;
            PlanExecutor::new(db.connection()).dry_run().execute(&plan)?;
            print_dry_run(&plan, global);
            return Ok(());
        }

        let reservation = cancel_reservation(&mut db, options)?;
        println!("{}", reservation.status());

        Ok(())
    }
}
