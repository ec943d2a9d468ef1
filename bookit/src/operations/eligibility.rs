//! Completed-reservation checks.
//!
//! An actor who has finished using a resource (an APPROVED reservation that
//! ended before `now`) may leave feedback on it.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::reservation::{ActorId, ResourceId};
use crate::store::ReservationStore;

/// Whether `requester` has completed a reservation of `resource`.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn has_completed_reservation<S>(
    store: &S,
    requester: ActorId,
    resource: ResourceId,
    now: DateTime<Utc>,
) -> Result<bool>
where
    S: ReservationStore + ?Sized,
{
    store.has_completed_reservation(requester, resource, now)
}

/// Like [`has_completed_reservation`], but a `false` answer is an error.
///
/// # Errors
///
/// Returns a validation error if there is no completed reservation, or a
/// database error if the query fails.
pub fn ensure_completed_reservation<S>(
    store: &S,
    requester: ActorId,
    resource: ResourceId,
    now: DateTime<Utc>,
) -> Result<()>
where
    S: ReservationStore + ?Sized,
{
    if has_completed_reservation(store, requester, resource, now)? {
        Ok(())
    } else {
        Err(Error::validation(
            "reservation",
            format!("actor {requester} has no completed reservation of resource {resource}"),
        ))
    }
}
