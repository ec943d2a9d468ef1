//! Approve command implementation.
//!
//! Owners decide on WAITING reservations of their resources. `--reject`
//! records a rejection instead of an approval.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_dry_run, GlobalOptions};
use bookit::operations::ApprovePlan;
use bookit::{approve_reservation, ActorId, ApproveOptions, PlanExecutor, ReservationId};
use clap::Args;

/// Approve or reject a waiting reservation.
#[derive(Args)]
pub struct ApproveCommand {
    /// Reservation to decide on
    #[arg(long, value_name = "ID")]
    pub reservation: i64,

    /// Acting owner
    #[arg(long, value_name = "ID")]
    pub actor: i64,

    /// Reject instead of approve
    #[arg(long)]
    pub reject: bool,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl ApproveCommand {
    /// Execute the approve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let reservation = ReservationId::new(self.reservation);
        let options =
            ApproveOptions::new(reservation, ActorId::new(self.actor)).with_decision(!self.reject);

        if self.dry_run {
            let plan = ApprovePlan::new(options).build_plan(db.connection())?;
            PlanExecutor::new(db.connection()).dry_run().execute(&plan)?;
            print_dry_run(&plan, global);
            return Ok(());
        }

        let reservation = approve_reservation(&mut db, options)?;
        println!("{}", reservation.status());

        Ok(())
    }
}
