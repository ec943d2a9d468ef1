//! Transaction management utilities.
//!
//! Every engine mutation runs inside an IMMEDIATE transaction: the write
//! lock is taken before the current status is read, so two writers can
//! never both observe WAITING for the same reservation.

use rusqlite::{Transaction, TransactionBehavior};

use crate::error::Result;

use super::connection::Database;

impl Database {
    /// Begins an IMMEDIATE transaction.
    ///
    /// Competing writers wait up to the configured busy timeout and then
    /// fail with a busy error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write lock cannot be acquired.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bookit::database::{Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/bookit.db")).unwrap();
    /// let tx = db.begin_transaction().unwrap();
    /// // ... plan and execute against &*tx ...
    /// tx.commit().unwrap();
    /// ```
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        Ok(tx)
    }
}
