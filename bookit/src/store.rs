//! Storage contracts consumed by the engine.
//!
//! The lifecycle, listing, and resolver code only talk to storage through
//! [`ReservationStore`]. The `SQLite` implementation lives on
//! [`rusqlite::Connection`]; pass `&*tx` to run inside a transaction.

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::catalog::{Actor, Resource};
use crate::classify::Bucket;
use crate::database::Database;
use crate::error::Result;
use crate::listing::Page;
use crate::reservation::{ActorId, Reservation, ReservationId, ResourceId, Status};

/// Storage-level predicate derived from a [`Bucket`] and an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationFilter {
    /// No restriction.
    All,
    /// `start <= now <= end`.
    Current(DateTime<Utc>),
    /// `end < now`.
    Past(DateTime<Utc>),
    /// `start > now`.
    Future(DateTime<Utc>),
    /// Exact status match.
    Status(Status),
}

impl ReservationFilter {
    /// Builds the filter for `bucket` evaluated at `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookit::{Bucket, ReservationFilter, Status};
    /// use chrono::Utc;
    ///
    /// let now = Utc::now();
    /// assert_eq!(ReservationFilter::for_bucket(Bucket::Past, now), ReservationFilter::Past(now));
    /// assert_eq!(
    ///     ReservationFilter::for_bucket(Bucket::Canceled, now),
    ///     ReservationFilter::Status(Status::Canceled)
    /// );
    /// ```
    #[must_use]
    pub const fn for_bucket(bucket: Bucket, now: DateTime<Utc>) -> Self {
        match bucket {
            Bucket::All => Self::All,
            Bucket::Current => Self::Current(now),
            Bucket::Past => Self::Past(now),
            Bucket::Future => Self::Future(now),
            Bucket::Waiting => Self::Status(Status::Waiting),
            Bucket::Rejected => Self::Status(Status::Rejected),
            Bucket::Canceled => Self::Status(Status::Canceled),
        }
    }
}

/// Read contracts the engine depends on.
///
/// Every listing method orders by start descending. A `page` of `None`
/// returns every match.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationStore {
    /// Fetches a reservation view by id.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    fn find_reservation(&self, id: ReservationId) -> Result<Option<Reservation>>;

    /// Fetches a resource by id.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    fn find_resource(&self, id: ResourceId) -> Result<Option<Resource>>;

    /// Fetches an actor by id.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    fn find_actor(&self, id: ActorId) -> Result<Option<Actor>>;

    /// Reservations made by `requester` matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    fn find_by_requester(
        &self,
        requester: ActorId,
        filter: ReservationFilter,
        page: Option<Page>,
    ) -> Result<Vec<Reservation>>;

    /// Identifiers of every resource owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    fn find_owned_resource_ids(&self, owner: ActorId) -> Result<Vec<ResourceId>>;

    /// Reservations on any of `resources` matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    fn find_by_resources(
        &self,
        resources: &[ResourceId],
        filter: ReservationFilter,
        page: Option<Page>,
    ) -> Result<Vec<Reservation>>;

    /// All APPROVED reservations on `resources` with `start < now`, in one
    /// round trip.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    fn find_approved_before(
        &self,
        resources: &[ResourceId],
        now: DateTime<Utc>,
    ) -> Result<Vec<Reservation>>;

    /// All APPROVED reservations on `resources` with `start > now`, in one
    /// round trip.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    fn find_approved_after(
        &self,
        resources: &[ResourceId],
        now: DateTime<Utc>,
    ) -> Result<Vec<Reservation>>;

    /// Ids of APPROVED reservations on `resource` whose interval overlaps
    /// `[start, end)`, earliest start first.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    fn find_approved_overlapping(
        &self,
        resource: ResourceId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ReservationId>>;

    /// Whether `requester` has an APPROVED reservation on `resource` that
    /// ended before `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    fn has_completed_reservation(
        &self,
        requester: ActorId,
        resource: ResourceId,
        now: DateTime<Utc>,
    ) -> Result<bool>;
}

impl ReservationStore for Connection {
    fn find_reservation(&self, id: ReservationId) -> Result<Option<Reservation>> {
        Database::get_reservation(self, id)
    }

    fn find_resource(&self, id: ResourceId) -> Result<Option<Resource>> {
        Database::get_resource(self, id)
    }

    fn find_actor(&self, id: ActorId) -> Result<Option<Actor>> {
        Database::get_actor(self, id)
    }

    fn find_by_requester(
        &self,
        requester: ActorId,
        filter: ReservationFilter,
        page: Option<Page>,
    ) -> Result<Vec<Reservation>> {
        Database::query_by_requester(self, requester, filter, page)
    }

    fn find_owned_resource_ids(&self, owner: ActorId) -> Result<Vec<ResourceId>> {
        Database::list_owned_resource_ids(self, owner)
    }

    fn find_by_resources(
        &self,
        resources: &[ResourceId],
        filter: ReservationFilter,
        page: Option<Page>,
    ) -> Result<Vec<Reservation>> {
        Database::query_by_resources(self, resources, filter, page)
    }

    fn find_approved_before(
        &self,
        resources: &[ResourceId],
        now: DateTime<Utc>,
    ) -> Result<Vec<Reservation>> {
        Database::query_approved_before(self, resources, now)
    }

    fn find_approved_after(
        &self,
        resources: &[ResourceId],
        now: DateTime<Utc>,
    ) -> Result<Vec<Reservation>> {
        Database::query_approved_after(self, resources, now)
    }

    fn find_approved_overlapping(
        &self,
        resource: ResourceId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ReservationId>> {
        Database::query_approved_overlapping(self, resource, start, end)
    }

    fn has_completed_reservation(
        &self,
        requester: ActorId,
        resource: ResourceId,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        Database::has_completed_reservation(self, requester, resource, now)
    }
}
