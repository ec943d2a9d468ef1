//! Reservation types for the booking engine.
//!
//! This module provides identifier newtypes, the [`Status`] state set, the
//! read-side [`Reservation`] view, and [`NewReservation`] for creation
//! requests. Both enforce `start < end` at construction.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

id_type!(
    /// Identifier of a persisted reservation.
    ReservationId
);
id_type!(
    /// Identifier of a reservable resource.
    ResourceId
);
id_type!(
    /// Identifier of an actor (user). Compared for identity only.
    ActorId
);

/// Lifecycle status of a reservation.
///
/// `Waiting` is the only non-terminal state. Statuses round-trip through
/// their upper-case names.
///
/// # Examples
///
/// ```
/// use bookit::Status;
///
/// let status: Status = "approved".parse().unwrap();
/// assert_eq!(status, Status::Approved);
/// assert_eq!(status.as_str(), "APPROVED");
/// assert!(status.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Awaiting the owner's decision.
    Waiting,
    /// Accepted by the owner.
    Approved,
    /// Declined by the owner.
    Rejected,
    /// Withdrawn by the requester before a decision.
    Canceled,
}

impl Status {
    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Whether no further transition is accepted from this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Waiting)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "WAITING" => Ok(Self::Waiting),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "CANCELED" => Ok(Self::Canceled),
            _ => Err(ValidationError::new("status", format!("Unknown status: {s}"))),
        }
    }
}

/// Summary of the reserved resource carried in a reservation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSummary {
    /// Resource identifier.
    pub id: ResourceId,
    /// Display name.
    pub name: String,
    /// Owner of the resource.
    pub owner: ActorId,
}

/// Summary of the requester carried in a reservation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorSummary {
    /// Actor identifier.
    pub id: ActorId,
    /// Display name.
    pub name: String,
}

/// A persisted reservation as returned by every engine operation.
///
/// Only `status` ever changes after creation.
///
/// # Examples
///
/// ```
/// use bookit::{Reservation, ReservationId, Status};
/// use chrono::{Duration, Utc};
///
/// let start = Utc::now();
/// let reservation = Reservation::builder(ReservationId::new(1), start, start + Duration::days(1))
///     .status(Status::Approved)
///     .build()
///     .unwrap();
/// assert_eq!(reservation.status(), Status::Approved);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: Status,
    resource: ResourceSummary,
    requester: ActorSummary,
}

impl Reservation {
    /// Creates a builder for a reservation with the given id and interval.
    #[must_use]
    pub fn builder(id: ReservationId, start: DateTime<Utc>, end: DateTime<Utc>) -> ReservationBuilder {
        ReservationBuilder::new(id, start, end)
    }

    /// Returns the reservation identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the start instant.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the end instant (strictly after start).
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the reserved resource summary.
    #[must_use]
    pub const fn resource(&self) -> &ResourceSummary {
        &self.resource
    }

    /// Returns the requester summary.
    #[must_use]
    pub const fn requester(&self) -> &ActorSummary {
        &self.requester
    }

    /// Returns the owner of the reserved resource.
    #[must_use]
    pub const fn owner(&self) -> ActorId {
        self.resource.owner
    }
}

/// Builder for [`Reservation`] values.
///
/// Resource and requester summaries default to placeholders with id 0 and
/// an empty name; status defaults to [`Status::Waiting`].
#[derive(Debug, Clone)]
pub struct ReservationBuilder {
    id: ReservationId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: Status,
    resource: ResourceSummary,
    requester: ActorSummary,
}

impl ReservationBuilder {
    fn new(id: ReservationId, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id,
            start,
            end,
            status: Status::Waiting,
            resource: ResourceSummary {
                id: ResourceId::new(0),
                name: String::new(),
                owner: ActorId::new(0),
            },
            requester: ActorSummary {
                id: ActorId::new(0),
                name: String::new(),
            },
        }
    }

    /// Sets the status.
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the resource summary.
    #[must_use]
    pub fn resource(mut self, resource: ResourceSummary) -> Self {
        self.resource = resource;
        self
    }

    /// Sets the requester summary.
    #[must_use]
    pub fn requester(mut self, requester: ActorSummary) -> Self {
        self.requester = requester;
        self
    }

    /// Builds the reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not strictly before `end`.
    pub fn build(self) -> Result<Reservation, ValidationError> {
        check_interval(self.start, self.end)?;
        Ok(Reservation {
            id: self.id,
            start: self.start,
            end: self.end,
            status: self.status,
            resource: self.resource,
            requester: self.requester,
        })
    }
}

/// A request to create a reservation, not yet persisted.
///
/// # Examples
///
/// ```
/// use bookit::{ActorId, NewReservation, ResourceId};
/// use chrono::{Duration, Utc};
///
/// let start = Utc::now();
/// let ok = NewReservation::new(ResourceId::new(1), ActorId::new(2), start, start + Duration::hours(1));
/// assert!(ok.is_ok());
///
/// let inverted = NewReservation::new(ResourceId::new(1), ActorId::new(2), start, start);
/// assert!(inverted.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    resource: ResourceId,
    requester: ActorId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl NewReservation {
    /// Creates a new reservation request.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not strictly before `end`.
    pub fn new(
        resource: ResourceId,
        requester: ActorId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        check_interval(start, end)?;
        Ok(Self {
            resource,
            requester,
            start,
            end,
        })
    }

    /// Returns the resource to reserve.
    #[must_use]
    pub const fn resource(&self) -> ResourceId {
        self.resource
    }

    /// Returns the requesting actor.
    #[must_use]
    pub const fn requester(&self) -> ActorId {
        self.requester
    }

    /// Returns the start instant.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the end instant.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

fn check_interval(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), ValidationError> {
    if start < end {
        Ok(())
    } else {
        Err(ValidationError::new(
            "end",
            format!("end ({end}) must be strictly after start ({start})"),
        ))
    }
}

/// Validation error for reservation construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn instant(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let r = Reservation::builder(ReservationId::new(3), instant(1), instant(2))
            .build()
            .unwrap();
        assert_eq!(r.id(), ReservationId::new(3));
        assert_eq!(r.status(), Status::Waiting);
        assert_eq!(r.owner(), ActorId::new(0));
        assert_eq!(r.requester().id, ActorId::new(0));
    }

    #[test]
    fn test_builder_rejects_empty_interval() {
        let err = Reservation::builder(ReservationId::new(1), instant(2), instant(2))
            .build()
            .unwrap_err();
        assert_eq!(err.field, "end");
    }

    #[test]
    fn test_builder_rejects_inverted_interval() {
        let result = Reservation::builder(ReservationId::new(1), instant(3), instant(2)).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_new_reservation_accessors() {
        let start = instant(1);
        let req = NewReservation::new(
            ResourceId::new(4),
            ActorId::new(9),
            start,
            start + Duration::minutes(30),
        )
        .unwrap();
        assert_eq!(req.resource(), ResourceId::new(4));
        assert_eq!(req.requester(), ActorId::new(9));
        assert_eq!(req.end() - req.start(), Duration::minutes(30));
    }

    #[test]
    fn test_status_parse_and_display() {
        for status in [
            Status::Waiting,
            Status::Approved,
            Status::Rejected,
            Status::Canceled,
        ] {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
            assert_eq!(status.to_string(), status.as_str());
        }
        assert_eq!("waiting".parse::<Status>().unwrap(), Status::Waiting);
        assert!("PENDING".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_terminality() {
        assert!(!Status::Waiting.is_terminal());
        assert!(Status::Approved.is_terminal());
        assert!(Status::Rejected.is_terminal());
        assert!(Status::Canceled.is_terminal());
    }

    #[test]
    fn test_id_display_and_serde() {
        let id = ResourceId::new(17);
        assert_eq!(id.to_string(), "17");
        assert_eq!(serde_json::to_string(&id).unwrap(), "17");
    }

    #[test]
    fn test_reservation_serializes_status_upper_case() {
        let r = Reservation::builder(ReservationId::new(1), instant(1), instant(2))
            .status(Status::Canceled)
            .build()
            .unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["status"], "CANCELED");
    }
}
