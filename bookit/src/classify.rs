//! Temporal classification and listing buckets.
//!
//! [`classify`] places a reservation relative to a caller-supplied instant.
//! [`Bucket`] is the closed set of listing filters; tokens outside it are
//! rejected rather than mapped to a default.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Error;
use crate::reservation::{Reservation, Status};

/// Position of a reservation relative to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeBucket {
    /// `start <= now <= end`.
    Current,
    /// `end < now`.
    Past,
    /// `start > now`.
    Future,
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "CURRENT"),
            Self::Past => write!(f, "PAST"),
            Self::Future => write!(f, "FUTURE"),
        }
    }
}

/// Classifies an interval relative to `now`.
///
/// Both bounds are inclusive for [`TimeBucket::Current`]. Requires
/// `start < end`, which every [`Reservation`] guarantees.
#[must_use]
pub fn classify_interval(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> TimeBucket {
    if end < now {
        TimeBucket::Past
    } else if start > now {
        TimeBucket::Future
    } else {
        TimeBucket::Current
    }
}

/// Classifies a reservation relative to `now`.
///
/// # Examples
///
/// ```
/// use bookit::{classify, Reservation, ReservationId, TimeBucket};
/// use chrono::{Duration, Utc};
///
/// let now = Utc::now();
/// let r = Reservation::builder(ReservationId::new(1), now, now + Duration::hours(2))
///     .build()
///     .unwrap();
/// assert_eq!(classify(&r, now), TimeBucket::Current);
/// assert_eq!(classify(&r, now - Duration::seconds(1)), TimeBucket::Future);
/// assert_eq!(classify(&r, now + Duration::hours(3)), TimeBucket::Past);
/// ```
#[must_use]
pub fn classify(reservation: &Reservation, now: DateTime<Utc>) -> TimeBucket {
    classify_interval(reservation.start(), reservation.end(), now)
}

/// Named listing filter.
///
/// Parsed case-insensitively from tokens such as `"past"` or `"WAITING"`.
///
/// # Examples
///
/// ```
/// use bookit::Bucket;
///
/// assert_eq!("current".parse::<Bucket>().unwrap(), Bucket::Current);
/// let err = "SOON".parse::<Bucket>().unwrap_err();
/// assert!(err.to_string().contains("Unknown state: SOON"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bucket {
    /// Every reservation.
    #[default]
    All,
    /// Reservations straddling `now`.
    Current,
    /// Reservations that ended before `now`.
    Past,
    /// Reservations starting after `now`.
    Future,
    /// Status is WAITING.
    Waiting,
    /// Status is REJECTED.
    Rejected,
    /// Status is CANCELED.
    Canceled,
}

impl Bucket {
    /// Every bucket, in display order.
    pub const VARIANTS: [Self; 7] = [
        Self::All,
        Self::Current,
        Self::Past,
        Self::Future,
        Self::Waiting,
        Self::Rejected,
        Self::Canceled,
    ];

    /// Returns the canonical token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Current => "CURRENT",
            Self::Past => "PAST",
            Self::Future => "FUTURE",
            Self::Waiting => "WAITING",
            Self::Rejected => "REJECTED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Whether `reservation` falls into this bucket at `now`.
    #[must_use]
    pub fn contains(self, reservation: &Reservation, now: DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Current => classify(reservation, now) == TimeBucket::Current,
            Self::Past => classify(reservation, now) == TimeBucket::Past,
            Self::Future => classify(reservation, now) == TimeBucket::Future,
            Self::Waiting => reservation.status() == Status::Waiting,
            Self::Rejected => reservation.status() == Status::Rejected,
            Self::Canceled => reservation.status() == Status::Canceled,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|bucket| bucket.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::validation("state", format!("Unknown state: {s}")))
    }
}
