//! Location repository.

use carpool_core::Location;
use rusqlite::{params, OptionalExtension};

use crate::{Result, Store};

impl Store {
    /// Whether a location code exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn location_exists(&self, lcode: &str) -> Result<bool> {
        let hit: Option<i64> = self
            .conn()
            .query_row(
                "SELECT 1 FROM locations WHERE lcode = ?1",
                params![lcode],
                |row| row.get(0),
            )
            .optional()?;
        Ok(hit.is_some())
    }

    /// Look up a location by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_location(&self, lcode: &str) -> Result<Option<Location>> {
        let location = self
            .conn()
            .query_row(
                "SELECT lcode, city, prov, address FROM locations WHERE lcode = ?1",
                params![lcode],
                |row| {
                    Ok(Location {
                        lcode: row.get(0)?,
                        city: row.get(1)?,
                        prov: row.get(2)?,
                        address: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(location)
    }

    /// Insert a location record (test fixtures and admin tooling).
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_location(&self, location: &Location) -> Result<()> {
        self.conn().execute(
            "INSERT INTO locations (lcode, city, prov, address) VALUES (?1, ?2, ?3, ?4)",
            params![
                location.lcode,
                location.city,
                location.prov,
                location.address,
            ],
        )?;
        Ok(())
    }
}
