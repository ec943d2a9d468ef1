//! Requester cancellation.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{ActorId, Reservation, ReservationId, Status};
use crate::store::ReservationStore;

use super::executor::PlanExecutor;
use super::plan::{OperationPlan, PlanAction};

/// Options for a cancel operation.
#[derive(Debug, Clone, Copy)]
pub struct CancelOptions {
    /// Reservation to cancel.
    pub reservation: ReservationId,

    /// Actor cancelling; must be the requester.
    pub actor: ActorId,
}

impl CancelOptions {
    /// Creates cancel options.
    #[must_use]
    pub const fn new(reservation: ReservationId, actor: ActorId) -> Self {
        Self { reservation, actor }
    }
}

/// A planner for cancel operations.
pub struct CancelPlan {
    options: CancelOptions,
}

impl CancelPlan {
    /// Creates a new cancel plan.
    #[must_use]
    pub const fn new(options: CancelOptions) -> Self {
        Self { options }
    }

    /// Checks every precondition and builds the plan.
    ///
    /// # Errors
    ///
    /// - Not found error if the reservation does not exist
    /// - Access denied error if the actor is not the requester
    /// - Validation error if the reservation is no longer WAITING
    pub fn build_plan<S>(&self, store: &S) -> Result<OperationPlan>
    where
        S: ReservationStore + ?Sized,
    {
        let opts = self.options;
        let reservation = store
            .find_reservation(opts.reservation)?
            .ok_or_else(|| Error::not_found(format!("reservation {}", opts.reservation)))?;

        if reservation.requester().id != opts.actor {
            return Err(Error::access_denied(format!(
                "only the requester can cancel reservation {}",
                opts.reservation
            )));
        }

        if reservation.status() != Status::Waiting {
            return Err(Error::validation(
                "status",
                format!("Reservation {} has already been processed", opts.reservation),
            ));
        }

        Ok(
            OperationPlan::new(format!("Cancel reservation {}", opts.reservation)).add_action(
                PlanAction::SetStatus {
                    id: opts.reservation,
                    from: Status::Waiting,
                    to: Status::Canceled,
                },
            ),
        )
    }
}

/// Plans and executes a cancellation inside one immediate transaction.
///
/// # Errors
///
/// Returns any planning error from [`CancelPlan::build_plan`], or a
/// database error if the transaction fails.
pub fn cancel_reservation(db: &mut Database, options: CancelOptions) -> Result<Reservation> {
    let tx = db.begin_transaction()?;
    let plan = CancelPlan::new(options).build_plan(&*tx)?;
    PlanExecutor::new(&tx).execute(&plan)?;

    let reservation = tx
        .find_reservation(options.reservation)?
        .ok_or_else(|| Error::not_found(format!("reservation {}", options.reservation)))?;
    tx.commit()?;
    Ok(reservation)
}
