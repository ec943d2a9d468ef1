//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which requests a time
//! window on a resource. New reservations start out WAITING.

use crate::error::CliError;
use crate::utils::{
    load_configuration, now, open_database, parse_timestamp, print_dry_run, GlobalOptions,
};
use bookit::operations::CreatePlan;
use bookit::{create_reservation, ActorId, CreateOptions, PlanExecutor, ResourceId};
use chrono::{DateTime, Utc};
use clap::Args;

/// Request a reservation on a resource.
#[derive(Args)]
pub struct ReserveCommand {
    /// Resource to reserve
    #[arg(long, value_name = "ID")]
    pub resource: i64,

    /// Actor making the request
    #[arg(long, value_name = "ID")]
    pub requester: i64,

    /// Start of the window (RFC 3339)
    #[arg(long, value_name = "TIME", value_parser = parse_timestamp)]
    pub start: DateTime<Utc>,

    /// End of the window (RFC 3339)
    #[arg(long, value_name = "TIME", value_parser = parse_timestamp)]
    pub end: DateTime<Utc>,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let now = now();

        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Build library CreateOptions
        let options = CreateOptions::new(
            ResourceId::new(self.resource),
            ActorId::new(self.requester),
            self.start,
            self.end,
        )
        .with_reject_past_dates(config.reject_past_dates());

        // 3. Open database
        let mut db = open_database(global, &config)?;

        // 4. Execute or dry-run
        if self.dry_run {
            let plan = CreatePlan::new(options).build_plan(db.connection(), now)?;
            PlanExecutor::new(db.connection()).dry_run().execute(&plan)?;
            print_dry_run(&plan, global);
            return Ok(());
        }

        let reservation = create_reservation(&mut db, options, now)?;

        // 5. Output just the id (shell-friendly) to stdout
        println!("{}", reservation.id());
        if !global.quiet {
            eprintln!(
                "Reservation {} on resource {} is {}",
                reservation.id(),
                reservation.resource().id,
                reservation.status()
            );
        }

        Ok(())
    }
}
