//! Database layer for persistent storage of actors, resources, and
//! reservations.
//!
//! This module provides a SQLite-based storage layer, including connection
//! management, schema versioning, and the queries behind the
//! [`ReservationStore`](crate::ReservationStore) contracts.
//!
//! # Examples
//!
//! ```no_run
//! use bookit::database::{Database, DatabaseConfig};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/bookit.db")).unwrap();
//! let owner = Database::insert_actor(db.connection(), "owner").unwrap();
//! let drill = Database::insert_resource(db.connection(), owner, "drill", true).unwrap();
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
};
pub use connection::Database;
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
