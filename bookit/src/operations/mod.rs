//! Reservation lifecycle using the plan-execute pattern.
//!
//! Mutations are split into two phases:
//! 1. **Planning**: checks every precondition against a
//!    [`ReservationStore`](crate::ReservationStore) and builds a plan
//! 2. **Execution**: applies the plan's actions to a connection
//!
//! The `*_reservation` functions run both phases inside one immediate
//! transaction and return the resulting reservation.
//!
//! # Examples
//!
//! ```no_run
//! use bookit::operations::{approve_reservation, create_reservation, ApproveOptions, CreateOptions};
//! use bookit::{Database, DatabaseConfig};
//! use chrono::{Duration, Utc};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/bookit.db")).unwrap();
//! let owner = Database::insert_actor(db.connection(), "owner").unwrap();
//! let borrower = Database::insert_actor(db.connection(), "borrower").unwrap();
//! let drill = Database::insert_resource(db.connection(), owner, "drill", true).unwrap();
//!
//! let now = Utc::now();
//! let options = CreateOptions::new(drill, borrower, now + Duration::days(1), now + Duration::days(2));
//! let created = create_reservation(&mut db, options, now).unwrap();
//!
//! let approved = approve_reservation(&mut db, ApproveOptions::new(created.id(), owner)).unwrap();
//! ```

pub mod approve;
pub mod cancel;
pub mod create;
pub mod eligibility;
pub mod executor;
pub mod plan;
pub mod view;

#[cfg(test)]
mod proptests;

pub use approve::{approve_reservation, ApproveOptions, ApprovePlan};
pub use cancel::{cancel_reservation, CancelOptions, CancelPlan};
pub use create::{create_reservation, CreateOptions, CreatePlan};
pub use eligibility::{ensure_completed_reservation, has_completed_reservation};
pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{OperationPlan, PlanAction};
pub use view::view_reservation;
