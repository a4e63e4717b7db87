//! SQLite storage layer for the carpool shell.
//!
//! One [`Store`] owns the single database connection for the lifetime
//! of a shell session. Each entity gets its own repository module
//! (members, bookings, requests, locations, inbox) exposing typed
//! operations; the SQL lives there and nowhere else.
//!
//! The connection runs in autocommit mode: every mutating operation is
//! durable once its statement returns. There are no cross-command
//! transactions, matching the shell's one-commit-per-logical-operation
//! contract.
//!
//! # Example
//!
//! ```no_run
//! use carpool_store::Store;
//!
//! let store = Store::open("carpool.db").unwrap();
//! store.init_schema().unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bookings;
pub mod error;
pub mod inbox;
pub mod locations;
pub mod members;
pub mod requests;
pub mod rides;
pub mod schema;

pub use error::{Result, StoreError};

use std::path::Path;

use rusqlite::types::Type;
use rusqlite::{Connection, Row};

use carpool_core::{Email, Price};

/// Gateway to the relational store.
///
/// Owns the single `rusqlite::Connection`; all repository operations
/// are methods on this type, grouped by entity module.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) a database file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self { conn })
    }

    /// Open a fresh in-memory database (primarily for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self { conn })
    }

    /// Create any missing tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the DDL fails.
    pub fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(schema::CREATE_TABLES)?;
        Ok(())
    }

    /// Release the connection.
    ///
    /// # Errors
    ///
    /// Returns an error if SQLite refuses to close (e.g. an unfinalized
    /// statement is still live).
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}

// Column helpers shared by the repository modules. Domain-type
// constructors can reject stored values, so failures surface as SQLite
// conversion errors carrying the column index.

pub(crate) fn email_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Email> {
    let raw: String = row.get(idx)?;
    Email::new(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(crate) fn price_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Price> {
    let raw: i64 = row.get(idx)?;
    Price::new(raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}
