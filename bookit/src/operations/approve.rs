//! Owner approval and rejection.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{ActorId, Reservation, ReservationId, Status};
use crate::store::ReservationStore;

use super::executor::PlanExecutor;
use super::plan::{OperationPlan, PlanAction};

/// Options for an approve operation.
#[derive(Debug, Clone, Copy)]
pub struct ApproveOptions {
    /// Reservation to decide on.
    pub reservation: ReservationId,

    /// Actor making the decision; must own the reserved resource.
    pub actor: ActorId,

    /// `true` approves, `false` rejects.
    pub approve: bool,
}

impl ApproveOptions {
    /// Creates options that approve the reservation.
    #[must_use]
    pub const fn new(reservation: ReservationId, actor: ActorId) -> Self {
        Self {
            reservation,
            actor,
            approve: true,
        }
    }

    /// Sets the decision.
    #[must_use]
    pub const fn with_decision(mut self, approve: bool) -> Self {
        self.approve = approve;
        self
    }

    const fn target(self) -> Status {
        if self.approve {
            Status::Approved
        } else {
            Status::Rejected
        }
    }
}

/// A planner for approve operations.
pub struct ApprovePlan {
    options: ApproveOptions,
}

impl ApprovePlan {
    /// Creates a new approve plan.
    #[must_use]
    pub const fn new(options: ApproveOptions) -> Self {
        Self { options }
    }

    /// Checks every precondition and builds the plan.
    ///
    /// # Errors
    ///
    /// - Not found error if the reservation does not exist
    /// - Access denied error if the actor does not own the resource
    /// - Validation error if the reservation is no longer WAITING
    pub fn build_plan<S>(&self, store: &S) -> Result<OperationPlan>
    where
        S: ReservationStore + ?Sized,
    {
        let opts = self.options;
        let reservation = store
            .find_reservation(opts.reservation)?
            .ok_or_else(|| Error::not_found(format!("reservation {}", opts.reservation)))?;

        if reservation.owner() != opts.actor {
            return Err(Error::access_denied(format!(
                "only the owner of resource {} can decide on reservation {}",
                reservation.resource().id,
                opts.reservation
            )));
        }

        if reservation.status() != Status::Waiting {
            return Err(Error::validation(
                "status",
                format!("Reservation {} has already been processed", opts.reservation),
            ));
        }

        let to = opts.target();
        let verb = if opts.approve { "Approve" } else { "Reject" };
        Ok(
            OperationPlan::new(format!("{verb} reservation {}", opts.reservation)).add_action(
                PlanAction::SetStatus {
                    id: opts.reservation,
                    from: Status::Waiting,
                    to,
                },
            ),
        )
    }
}

/// Plans and executes an approval inside one immediate transaction.
///
/// The write lock is held from the status read to the status write, so of
/// two racing decisions on one reservation exactly one succeeds.
///
/// # Errors
///
/// Returns any planning error from [`ApprovePlan::build_plan`], or a
/// database error if the transaction fails.
pub fn approve_reservation(db: &mut Database, options: ApproveOptions) -> Result<Reservation> {
    let tx = db.begin_transaction()?;
    let plan = ApprovePlan::new(options).build_plan(&*tx)?;
    PlanExecutor::new(&tx).execute(&plan)?;

    let reservation = tx
        .find_reservation(options.reservation)?
        .ok_or_else(|| Error::not_found(format!("reservation {}", options.reservation)))?;
    tx.commit()?;
    Ok(reservation)
}
