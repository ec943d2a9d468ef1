//! Shared test utilities for database unit tests.

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::reservation::{ActorId, NewReservation, ReservationId, ResourceId};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// A minimal catalog: one owner, one requester, one available resource.
pub struct TestCatalog {
    /// Owner of `resource`.
    pub owner: ActorId,
    /// An unrelated actor who books `resource`.
    pub requester: ActorId,
    /// The shared resource.
    pub resource: ResourceId,
}

impl TestCatalog {
    /// Inserts the catalog rows.
    ///
    /// # Panics
    ///
    /// Panics if any insert fails.
    pub fn seed(conn: &Connection) -> Self {
        let owner = Database::insert_actor(conn, "owner").unwrap();
        let requester = Database::insert_actor(conn, "requester").unwrap();
        let resource = Database::insert_resource(conn, owner, "drill", true).unwrap();
        Self {
            owner,
            requester,
            resource,
        }
    }

    /// Inserts a WAITING reservation by `requester` on `resource`.
    ///
    /// # Panics
    ///
    /// Panics if the interval is invalid or the insert fails.
    pub fn reserve(
        &self,
        conn: &Connection,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ReservationId {
        let new = NewReservation::new(self.resource, self.requester, start, end).unwrap();
        Database::insert_reservation(conn, &new).unwrap()
    }
}
