//! Read access to a single reservation.

use crate::error::{Error, Result};
use crate::reservation::{ActorId, Reservation, ReservationId};
use crate::store::ReservationStore;

/// Returns a reservation to its requester or to the resource owner.
///
/// # Errors
///
/// - Not found error if the reservation does not exist
/// - Access denied error for any other actor
pub fn view_reservation<S>(store: &S, id: ReservationId, actor: ActorId) -> Result<Reservation>
where
    S: ReservationStore + ?Sized,
{
    let reservation = store
        .find_reservation(id)?
        .ok_or_else(|| Error::not_found(format!("reservation {id}")))?;

    if reservation.requester().id != actor && reservation.owner() != actor {
        return Err(Error::access_denied(format!(
            "actor {actor} may not view reservation {id}"
        )));
    }
    Ok(reservation)
}
