#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # bookit
//!
//! A reservation engine for sharing items between users.
//!
//! Owners list resources; other actors request time windows on them. The
//! engine decides whether a request may be created, moves it through an
//! owner-approval lifecycle, classifies reservations into listing buckets,
//! and annotates many resources at once with their nearest past and
//! upcoming approved reservation.
//!
//! ## Core Types
//!
//! - [`Reservation`] and [`Status`]: the lifecycle record
//! - [`classify`], [`TimeBucket`] and [`Bucket`]: temporal classification
//! - [`ReservationStore`]: the storage contracts, implemented for `SQLite`
//! - [`list_reservations`] and [`resolve_nearest`]: read paths
//! - [`operations`]: create, approve, cancel and view
//! - [`Error`] and [`Result`]: error handling types
//!
//! Every function that depends on the current time takes `now` as a
//! parameter; nothing in the library samples the clock.
//!
//! ## Examples
//!
//! ```
//! use bookit::{classify, Bucket, Reservation, ReservationId, Status, TimeBucket};
//! use chrono::{Duration, Utc};
//!
//! let now = Utc::now();
//! let r = Reservation::builder(ReservationId::new(1), now - Duration::days(2), now - Duration::days(1))
//!     .status(Status::Approved)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(classify(&r, now), TimeBucket::Past);
//! assert!("past".parse::<Bucket>().unwrap().contains(&r, now));
//! ```

pub mod catalog;
pub mod classify;
pub mod config;
pub mod database;
pub mod error;
pub mod listing;
pub mod logging;
pub mod nearest;
pub mod operations;
pub mod reservation;
pub mod store;

// Re-export key types at crate root for convenience
pub use catalog::{Actor, Resource};
pub use classify::{classify, classify_interval, Bucket, TimeBucket};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, ErrorKind, Result};
pub use listing::{list_reservations, ListOptions, Page, Role};
pub use logging::{init_logger, LogLevel, Logger};
pub use nearest::{resolve_nearest, Nearest};
pub use operations::{
    approve_reservation, cancel_reservation, create_reservation, ensure_completed_reservation,
    has_completed_reservation, view_reservation, ApproveOptions, CancelOptions, CreateOptions,
    ExecutionResult, OperationPlan, PlanAction, PlanExecutor,
};
pub use reservation::{
    ActorId, ActorSummary, NewReservation, Reservation, ReservationId, ResourceId,
    ResourceSummary, Status,
};
pub use store::{ReservationFilter, ReservationStore};
