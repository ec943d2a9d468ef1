//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to the database.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::ReservationId;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what actions were taken.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The reservation the plan created or updated.
    ///
    /// `None` for a dry-run create, since no id has been assigned yet.
    pub reservation_id: Option<ReservationId>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool, reservation_id: Option<ReservationId>) -> Self {
        Self {
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reservation_id,
        }
    }
}

/// Executes operation plans against a connection.
///
/// Pass an open transaction (`&tx`) so that planning and execution share
/// one atomic unit. In dry-run mode nothing is written.
///
/// # Examples
///
/// ```no_run
/// use bookit::operations::{PlanExecutor, OperationPlan};
/// use bookit::{Database, DatabaseConfig};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/bookit.db")).unwrap();
/// let plan = OperationPlan::new("Nothing to do");
///
/// let tx = db.begin_transaction().unwrap();
/// let result = PlanExecutor::new(&tx).execute(&plan).unwrap();
/// tx.commit().unwrap();
/// assert!(!result.dry_run);
/// ```
pub struct PlanExecutor<'a> {
    conn: &'a Connection,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails to execute. A status change
    /// whose expected status no longer matches fails with a validation
    /// error and writes nothing.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            let id = plan.actions.iter().find_map(|action| match action {
                PlanAction::SetStatus { id, .. } => Some(*id),
                PlanAction::InsertReservation(_) => None,
            });
            return Ok(ExecutionResult::new(plan, true, id));
        }

        for warning in &plan.warnings {
            log::warn!("{warning}");
        }

        let mut reservation_id = None;
        for action in &plan.actions {
            reservation_id = Some(self.execute_action(action)?);
        }

        Ok(ExecutionResult::new(plan, false, reservation_id))
    }

    fn execute_action(&self, action: &PlanAction) -> Result<ReservationId> {
        match action {
            PlanAction::InsertReservation(new) => {
                let id = Database::insert_reservation(self.conn, new)?;
                log::info!(
                    "Created reservation {id} of resource {} for actor {}",
                    new.resource(),
                    new.requester()
                );
                Ok(id)
            }
            PlanAction::SetStatus { id, from, to } => {
                if !Database::transition_status(self.conn, *id, *from, *to)? {
                    return Err(Error::validation(
                        "status",
                        format!("Reservation {id} has already been processed"),
                    ));
                }
                log::info!("Reservation {id} moved from {from} to {to}");
                Ok(*id)
            }
        }
    }
}
