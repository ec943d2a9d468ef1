//! Paginated reservation listings for requesters and owners.
//!
//! A listing is validated before storage is touched: pagination first,
//! then the bucket token, then the actor's existence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::Bucket;
use crate::error::{Error, Result};
use crate::reservation::{ActorId, Reservation};
use crate::store::{ReservationFilter, ReservationStore};

/// A pagination window.
///
/// The caller's offset snaps down to a page boundary: `from = 7, size = 3`
/// selects page index 2, which starts at row 6.
///
/// # Examples
///
/// ```
/// use bookit::Page;
///
/// let page = Page::new(7, 3).unwrap();
/// assert_eq!(page.index(), 2);
/// assert_eq!(page.offset(), 6);
/// assert!(Page::new(-1, 3).is_err());
/// assert!(Page::new(0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    from: i64,
    size: i64,
}

impl Page {
    /// Validates and builds a page window.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `from` if it is negative, or
    /// `size` if it is not positive.
    pub fn new(from: i64, size: i64) -> Result<Self> {
        if from < 0 {
            return Err(Error::validation(
                "from",
                format!("from must be zero or greater, got {from}"),
            ));
        }
        if size <= 0 {
            return Err(Error::validation(
                "size",
                format!("size must be greater than zero, got {size}"),
            ));
        }
        Ok(Self { from, size })
    }

    /// The offset the caller asked for.
    #[must_use]
    pub const fn requested_offset(self) -> i64 {
        self.from
    }

    /// Page length.
    #[must_use]
    pub const fn size(self) -> i64 {
        self.size
    }

    /// Zero-based page index, `from / size`.
    #[must_use]
    pub const fn index(self) -> i64 {
        self.from / self.size
    }

    /// Row offset of the first element of the page.
    #[must_use]
    pub const fn offset(self) -> i64 {
        self.index() * self.size
    }
}

/// Whose reservations to list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Reservations the actor made.
    #[default]
    Requester,
    /// Reservations on resources the actor owns.
    Owner,
}

/// Parameters for [`list_reservations`].
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// The actor whose reservations are listed.
    pub actor: ActorId,
    /// Requester or owner view.
    pub role: Role,
    /// Bucket token, parsed case-insensitively.
    pub state: String,
    /// Requested offset.
    pub from: i64,
    /// Page length.
    pub size: i64,
}

impl ListOptions {
    /// Lists everything the actor requested, first page of ten.
    #[must_use]
    pub fn new(actor: ActorId) -> Self {
        Self {
            actor,
            role: Role::Requester,
            state: Bucket::All.as_str().to_string(),
            from: 0,
            size: 10,
        }
    }

    /// Sets the role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Sets the bucket token.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Sets the pagination window.
    #[must_use]
    pub const fn with_page(mut self, from: i64, size: i64) -> Self {
        self.from = from;
        self.size = size;
        self
    }
}

/// Lists an actor's reservations in one bucket, newest start first.
///
/// `now` is sampled once by the caller so the whole listing uses a single
/// reference instant.
///
/// # Errors
///
/// - Validation error for a negative `from`, a non-positive `size` or an
///   unknown bucket token
/// - Not found error if the actor does not exist
/// - Database errors from the store
pub fn list_reservations<S>(
    store: &S,
    options: &ListOptions,
    now: DateTime<Utc>,
) -> Result<Vec<Reservation>>
where
    S: ReservationStore + ?Sized,
{
    let page = Page::new(options.from, options.size)?;
    let bucket: Bucket = options.state.parse()?;

    if store.find_actor(options.actor)?.is_none() {
        return Err(Error::not_found(format!("actor {}", options.actor)));
    }

    let filter = ReservationFilter::for_bucket(bucket, now);
    log::debug!(
        "Listing {:?} reservations of actor {} in {bucket} (page {}, size {})",
        options.role,
        options.actor,
        page.index(),
        page.size()
    );

    match options.role {
        Role::Requester => store.find_by_requester(options.actor, filter, Some(page)),
        Role::Owner => {
            let owned = store.find_owned_resource_ids(options.actor)?;
            if owned.is_empty() {
                return Ok(Vec::new());
            }
            store.find_by_resources(&owned, filter, Some(page))
        }
    }
}
