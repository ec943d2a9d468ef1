//! Shared database test utilities.

use std::path::PathBuf;

use bookit::database::{Database, DatabaseConfig};
use bookit::{ActorId, NewReservation, ReservationId, ResourceId, Status};
use chrono::{DateTime, Utc};

/// Creates a temporary test database.
///
/// The temporary directory is leaked so the file outlives the test body.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    Database::open(DatabaseConfig::new(create_test_database_path())).unwrap()
}

/// Returns a fresh database path inside a leaked temporary directory.
#[allow(dead_code)]
pub fn create_test_database_path() -> PathBuf {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    std::mem::forget(dir);
    path
}

/// Owner, requester, a stranger and one available resource.
#[allow(dead_code)]
pub struct Fixture {
    /// Owns `resource`.
    pub owner: ActorId,
    /// Books `resource`.
    pub requester: ActorId,
    /// Unrelated to everything.
    pub stranger: ActorId,
    /// The shared item.
    pub resource: ResourceId,
}

impl Fixture {
    /// Inserts the fixture rows.
    #[allow(dead_code)]
    pub fn seed(db: &Database) -> Self {
        let conn = db.connection();
        let owner = Database::insert_actor(conn, "olivia").unwrap();
        let requester = Database::insert_actor(conn, "ravi").unwrap();
        let stranger = Database::insert_actor(conn, "sam").unwrap();
        let resource = Database::insert_resource(conn, owner, "circular saw", true).unwrap();
        Self {
            owner,
            requester,
            stranger,
            resource,
        }
    }

    /// Inserts a reservation directly and forces it to `status`.
    ///
    /// Bypasses the lifecycle so tests can place reservations in the past.
    #[allow(dead_code)]
    pub fn insert(
        &self,
        db: &Database,
        resource: ResourceId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        status: Status,
    ) -> ReservationId {
        let conn = db.connection();
        let new = NewReservation::new(resource, self.requester, start, end).unwrap();
        let id = Database::insert_reservation(conn, &new).unwrap();
        if status != Status::Waiting {
            assert!(Database::transition_status(conn, id, Status::Waiting, status).unwrap());
        }
        id
    }
}
