//! Database schema management and migrations.
//!
//! This module handles database schema initialization and version checking.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_ACTORS_TABLE, CREATE_METADATA_TABLE, CREATE_OWNER_INDEX, CREATE_REQUESTER_INDEX,
    CREATE_RESERVATIONS_TABLE, CREATE_RESOURCES_TABLE, CREATE_RESOURCE_INDEX,
    CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Initializes the database schema.
///
/// Creates all tables, indices, and metadata for a fresh database.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use bookit::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_ACTORS_TABLE, [])?;
    conn.execute(CREATE_RESOURCES_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;

    conn.execute(CREATE_REQUESTER_INDEX, [])?;
    conn.execute(CREATE_RESOURCE_INDEX, [])?;
    conn.execute(CREATE_OWNER_INDEX, [])?;

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION.to_string()])?;

    log::debug!("initialized schema version {CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than a missing
/// metadata table or row (both of which mean version 0).
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    let has_metadata: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'metadata')",
        [],
        |row| row.get(0),
    )?;
    if !has_metadata {
        return Ok(0);
    }

    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value.parse::<i32>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => Err(e.into()),
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// A fresh database is initialized. Any other version than
/// [`CURRENT_SCHEMA_VERSION`] is rejected.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] on a version mismatch, or
/// a database error if initialization fails.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        return initialize_schema(conn);
    }

    if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}
