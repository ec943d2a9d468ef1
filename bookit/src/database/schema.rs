//! Database schema definitions and SQL constants.
//!
//! Instants are stored as Unix epoch milliseconds. Statuses are stored as
//! their upper-case names.

/// Current schema version for the database.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the actors table.
pub const CREATE_ACTORS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS actors (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )";

/// SQL statement to create the resources table.
pub const CREATE_RESOURCES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS resources (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id INTEGER NOT NULL REFERENCES actors(id),
        name TEXT NOT NULL,
        available INTEGER NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// The CHECK constraint mirrors the `start < end` invariant enforced by
/// the domain types.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        resource_id INTEGER NOT NULL REFERENCES resources(id),
        requester_id INTEGER NOT NULL REFERENCES actors(id),
        start_at INTEGER NOT NULL,
        end_at INTEGER NOT NULL,
        status TEXT NOT NULL
            CHECK (status IN ('WAITING', 'APPROVED', 'REJECTED', 'CANCELED')),
        CHECK (start_at < end_at)
    )";

/// Index for requester listings ordered by start.
pub const CREATE_REQUESTER_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_reservations_requester \
     ON reservations(requester_id, start_at)";

/// Index for owner listings and batched nearest-neighbor lookups.
pub const CREATE_RESOURCE_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_reservations_resource \
     ON reservations(resource_id, status, start_at)";

/// Index for resolving an owner's resources.
pub const CREATE_OWNER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_resources_owner ON resources(owner_id)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a new reservation.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (resource_id, requester_id, start_at, end_at, status)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

/// Compare-and-set status transition.
///
/// Affects zero rows when the stored status no longer matches `?3`.
pub const TRANSITION_STATUS: &str = r"
    UPDATE reservations
    SET status = ?2
    WHERE id = ?1 AND status = ?3
";

/// Projection shared by every reservation query.
///
/// Column order: id, `start_at`, `end_at`, status, resource id, resource
/// name, owner id, requester id, requester name.
pub const SELECT_RESERVATION_VIEW: &str = r"
    SELECT r.id, r.start_at, r.end_at, r.status,
           i.id, i.name, i.owner_id,
           a.id, a.name
    FROM reservations r
    JOIN resources i ON i.id = r.resource_id
    JOIN actors a ON a.id = r.requester_id
";
