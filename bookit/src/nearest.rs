//! Nearest past and upcoming approved reservation per resource.
//!
//! Resolution costs two store round trips no matter how many resources
//! are asked about: one batched fetch per direction, then grouping and
//! selection in memory.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::reservation::{Reservation, ResourceId};
use crate::store::ReservationStore;

/// The approved reservations bracketing `now` on one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Nearest {
    /// Approved reservation that started before `now` with the latest end.
    pub last: Option<Reservation>,
    /// Approved reservation that starts after `now` with the earliest start.
    pub next: Option<Reservation>,
}

/// Resolves [`Nearest`] for every resource in `resources`.
///
/// Duplicate ids are collapsed. Every requested id appears in the result,
/// with `None` on a side that has no candidate. A reservation straddling
/// `now` started before it, so it competes for `last`. Ties are broken by
/// the higher id for `last` and the lower id for `next`.
///
/// The id set is passed to the store whole. The `SQLite` store splits it
/// into bounded statements, so there is no practical cap on its size.
///
/// # Errors
///
/// Returns an error if either batched fetch fails.
pub fn resolve_nearest<S>(
    store: &S,
    resources: &[ResourceId],
    now: DateTime<Utc>,
) -> Result<HashMap<ResourceId, Nearest>>
where
    S: ReservationStore + ?Sized,
{
    let ids: Vec<ResourceId> = resources
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut result: HashMap<ResourceId, Nearest> =
        ids.iter().map(|id| (*id, Nearest::default())).collect();
    if ids.is_empty() {
        return Ok(result);
    }

    let before = store.find_approved_before(&ids, now)?;
    let after = store.find_approved_after(&ids, now)?;
    log::debug!(
        "Resolving nearest reservations for {} resources ({} before, {} after)",
        ids.len(),
        before.len(),
        after.len()
    );

    for reservation in before {
        if let Some(slot) = result.get_mut(&reservation.resource().id) {
            let replace = slot.last.as_ref().map_or(true, |current| {
                (reservation.end(), reservation.id()) > (current.end(), current.id())
            });
            if replace {
                slot.last = Some(reservation);
            }
        }
    }

    for reservation in after {
        if let Some(slot) = result.get_mut(&reservation.resource().id) {
            let replace = slot.next.as_ref().map_or(true, |current| {
                (reservation.start(), reservation.id()) < (current.start(), current.id())
            });
            if replace {
                slot.next = Some(reservation);
            }
        }
    }

    Ok(result)
}
