//! Reservation creation planning.
//!
//! Preconditions are checked in a fixed order, so a request that breaks
//! several rules always reports the same one:
//!
//! 1. the interval (and, in strict mode, that neither bound is past)
//! 2. the resource exists and is available
//! 3. the requester exists
//! 4. the requester does not own the resource

use chrono::{DateTime, SubsecRound, Utc};

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{ActorId, NewReservation, Reservation, ResourceId};
use crate::store::ReservationStore;

use super::executor::PlanExecutor;
use super::plan::{OperationPlan, PlanAction};

/// Options for a create operation.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Resource to reserve.
    pub resource: ResourceId,

    /// Actor making the reservation.
    pub requester: ActorId,

    /// Start of the requested window.
    pub start: DateTime<Utc>,

    /// End of the requested window, strictly after `start`.
    pub end: DateTime<Utc>,

    /// Reject windows whose start or end lies before the planning instant.
    pub reject_past_dates: bool,
}

impl CreateOptions {
    /// Creates options with strict past-date checking enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookit::operations::CreateOptions;
    /// use bookit::{ActorId, ResourceId};
    /// use chrono::{Duration, Utc};
    ///
    /// let start = Utc::now() + Duration::days(1);
    /// let options = CreateOptions::new(ResourceId::new(1), ActorId::new(2), start, start + Duration::hours(3));
    /// assert!(options.reject_past_dates);
    /// ```
    #[must_use]
    pub const fn new(
        resource: ResourceId,
        requester: ActorId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            resource,
            requester,
            start,
            end,
            reject_past_dates: true,
        }
    }

    /// Sets the strict past-date flag.
    #[must_use]
    pub const fn with_reject_past_dates(mut self, reject: bool) -> Self {
        self.reject_past_dates = reject;
        self
    }
}

/// A planner for create operations.
pub struct CreatePlan {
    options: CreateOptions,
}

impl CreatePlan {
    /// Creates a new create plan.
    #[must_use]
    pub const fn new(options: CreateOptions) -> Self {
        Self { options }
    }

    /// Checks every precondition and builds the plan.
    ///
    /// # Errors
    ///
    /// - Validation error if `start >= end`, if strict mode is on and a
    ///   bound is before `now`, or if the resource is unavailable
    /// - Not found error if the resource or requester does not exist, or if
    ///   the requester owns the resource
    /// - Database errors from the store
    ///
    /// Instants are truncated to milliseconds before any check. An
    /// overlap with an APPROVED reservation on the same resource is not an
    /// error; it is reported as a plan warning.
    pub fn build_plan<S>(&self, store: &S, now: DateTime<Utc>) -> Result<OperationPlan>
    where
        S: ReservationStore + ?Sized,
    {
        let opts = &self.options;

        // Storage keeps millisecond precision; check the interval as stored.
        let start = opts.start.trunc_subsecs(3);
        let end = opts.end.trunc_subsecs(3);
        let now = now.trunc_subsecs(3);

        let new = NewReservation::new(opts.resource, opts.requester, start, end)?;
        if opts.reject_past_dates {
            if start < now {
                return Err(Error::validation(
                    "start",
                    format!("start {} is in the past", start.to_rfc3339()),
                ));
            }
            if end < now {
                return Err(Error::validation(
                    "end",
                    format!("end {} is in the past", end.to_rfc3339()),
                ));
            }
        }

        let resource = store
            .find_resource(opts.resource)?
            .ok_or_else(|| Error::not_found(format!("resource {}", opts.resource)))?;
        if !resource.available {
            return Err(Error::validation(
                "resource",
                format!("resource {} is not available", opts.resource),
            ));
        }

        if store.find_actor(opts.requester)?.is_none() {
            return Err(Error::not_found(format!("actor {}", opts.requester)));
        }

        // Self-booking reports the resource as missing.
        if resource.is_owned_by(opts.requester) {
            return Err(Error::not_found(format!("resource {}", opts.resource)));
        }

        let mut plan = OperationPlan::new(format!(
            "Reserve resource {} for actor {}",
            opts.resource, opts.requester
        ))
        .add_action(PlanAction::InsertReservation(new));

        let overlapping = store.find_approved_overlapping(opts.resource, start, end)?;
        if !overlapping.is_empty() {
            let ids: Vec<String> = overlapping.iter().map(ToString::to_string).collect();
            plan = plan.add_warning(format!(
                "resource {} already has approved reservation(s) {} overlapping this window",
                opts.resource,
                ids.join(", ")
            ));
        }

        Ok(plan)
    }
}

/// Plans and executes a create inside one immediate transaction.
///
/// # Errors
///
/// Returns any planning error from [`CreatePlan::build_plan`], or a
/// database error if the transaction fails.
pub fn create_reservation(
    db: &mut Database,
    options: CreateOptions,
    now: DateTime<Utc>,
) -> Result<Reservation> {
    let tx = db.begin_transaction()?;
    let plan = CreatePlan::new(options).build_plan(&*tx, now)?;
    let result = PlanExecutor::new(&tx).execute(&plan)?;

    let reservation = match result.reservation_id {
        Some(id) => tx.find_reservation(id)?,
        None => None,
    }
    .ok_or_else(|| Error::not_found("created reservation"))?;

    tx.commit()?;
    Ok(reservation)
}
